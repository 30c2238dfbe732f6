// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Boundary Model
//!
//! Extended domain values and interval boundaries. This module defines the
//! ordering that every higher layer of the crate reduces to: merging in
//! union, clipping in intersection, and carving in relative complement are
//! all decided by comparing two `Endpoint` values.
//!
//! ## The touching rule
//!
//! Two boundaries meeting at the same value do not always coincide. An upper
//! boundary `5]` and a lower boundary `[5` both include the value, so the
//! ranges they border share a point and the boundaries coincide; the same
//! holds when exactly one side is open, because the closed side supplies the
//! shared point. Only when both sides are open (`5)` meeting `(5`) is the
//! value in neither range — the upper boundary then sorts strictly before
//! the lower one, which is what keeps `[0, 1)` and `(1, 2]` from merging.
//!
//! Because of this rule the relation is *not* a lawful `Ord`: coincidence is
//! not transitive across sides (`5)` coincides with `[5`, `[5` with `5]`,
//! yet `5)` strictly precedes `5]`). Structural equality on `Endpoint` stays
//! derive-based; the semantic relation lives in [`Endpoint::boundary_cmp`]
//! and its predicate helpers.

use std::cmp::Ordering;
use std::fmt;

/// A domain value extended with infinite sentinels.
///
/// The derived ordering is the total order the algebra relies on:
/// `NegInfinity < Finite(a) < Finite(b) < PosInfinity` whenever `a < b`.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::bound::Extended;
///
/// assert!(Extended::NegInfinity < Extended::Finite(i64::MIN));
/// assert!(Extended::Finite(i64::MAX) < Extended::PosInfinity);
/// assert!(Extended::Finite(-3) < Extended::Finite(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Extended<T> {
    /// Below every finite value.
    NegInfinity,
    /// An ordinary domain value.
    Finite(T),
    /// Above every finite value.
    PosInfinity,
}

impl<T> Extended<T> {
    /// Returns `true` if this is a finite domain value.
    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite value, if there is one.
    #[inline]
    pub const fn as_finite(&self) -> Option<&T> {
        match self {
            Self::Finite(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Extended<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegInfinity => f.write_str("-∞"),
            Self::Finite(v) => v.fmt(f),
            Self::PosInfinity => f.write_str("∞"),
        }
    }
}

/// Which end of an interval a boundary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The boundary opens an interval.
    Lower,
    /// The boundary closes an interval.
    Upper,
}

/// A single interval boundary: a value, a side, and an openness flag.
///
/// An endpoint alone carries no interval semantics — meaning comes from
/// pairing a `Lower` endpoint with an `Upper` one in
/// [`Interval::new`](crate::interval::Interval::new). What the endpoint does
/// own is the boundary ordering ([`boundary_cmp`](Self::boundary_cmp)),
/// which all set-algebra decisions reduce to.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::bound::{Endpoint, Extended};
///
/// // The lower boundary of `[5, ...`:
/// let closed = Endpoint::lower(Extended::Finite(5), false);
/// // The lower boundary of `(5, ...`:
/// let open = Endpoint::lower(Extended::Finite(5), true);
///
/// // An interval starting at 5 inclusively starts earlier than one
/// // starting at 5 exclusively.
/// assert!(closed.strictly_before(&open));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint<T> {
    value: Extended<T>,
    side: Side,
    open: bool,
}

impl<T> Endpoint<T> {
    /// Creates an endpoint from its three attributes.
    ///
    /// `open == true` means the boundary value itself is excluded from the
    /// interval the endpoint borders.
    #[inline]
    pub const fn new(value: Extended<T>, side: Side, open: bool) -> Self {
        Self { value, side, open }
    }

    /// Creates a lower-side endpoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::bound::{Endpoint, Extended, Side};
    ///
    /// let e = Endpoint::lower(Extended::Finite(0), true);
    /// assert_eq!(e.side(), Side::Lower);
    /// assert!(e.is_open());
    /// ```
    #[inline]
    pub const fn lower(value: Extended<T>, open: bool) -> Self {
        Self::new(value, Side::Lower, open)
    }

    /// Creates an upper-side endpoint.
    #[inline]
    pub const fn upper(value: Extended<T>, open: bool) -> Self {
        Self::new(value, Side::Upper, open)
    }

    /// Returns the extended domain value of the boundary.
    #[inline]
    pub const fn value(&self) -> &Extended<T> {
        &self.value
    }

    /// Returns which end of an interval this boundary belongs to.
    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns `true` if the boundary value is excluded from the interval.
    #[inline]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Turns this boundary into the upper boundary of an adjacent, disjoint
    /// interval that touches it from below.
    ///
    /// The side flips to `Upper` and the openness is negated, so exactly one
    /// of the two touching intervals owns the boundary value. Used to carve
    /// out the part of an interval that lies before another one begins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::bound::{Endpoint, Extended, Side};
    ///
    /// // `(2, ...` touches `..., 2]` from above.
    /// let lower = Endpoint::lower(Extended::Finite(2), true);
    /// let upper = lower.into_adjacent_upper();
    /// assert_eq!(upper.side(), Side::Upper);
    /// assert!(!upper.is_open());
    /// ```
    #[inline]
    #[must_use = "this method consumes the endpoint and returns the adjacent one"]
    pub fn into_adjacent_upper(self) -> Self {
        Self::upper(self.value, !self.open)
    }

    /// Turns this boundary into the lower boundary of an adjacent, disjoint
    /// interval that touches it from above.
    ///
    /// The mirror image of [`into_adjacent_upper`](Self::into_adjacent_upper).
    #[inline]
    #[must_use = "this method consumes the endpoint and returns the adjacent one"]
    pub fn into_adjacent_lower(self) -> Self {
        Self::lower(self.value, !self.open)
    }
}

impl<T: Ord> Endpoint<T> {
    /// Compares two boundaries in the boundary order.
    ///
    /// Values are compared first. At equal values the side and openness
    /// break the tie:
    ///
    /// - both `Upper`: the open boundary closes its interval earlier and
    ///   sorts smaller;
    /// - both `Lower`: the open boundary opens its interval later and sorts
    ///   larger;
    /// - mixed sides: the boundaries coincide unless *both* are open, in
    ///   which case the `Upper` one sorts strictly smaller (the shared value
    ///   belongs to neither interval, so the ranges do not touch).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::cmp::Ordering;
    /// # use spanset_core::bound::{Endpoint, Extended};
    ///
    /// let up_closed = Endpoint::upper(Extended::Finite(1), false); // 1]
    /// let up_open = Endpoint::upper(Extended::Finite(1), true);    // 1)
    /// let lo_closed = Endpoint::lower(Extended::Finite(1), false); // [1
    /// let lo_open = Endpoint::lower(Extended::Finite(1), true);    // (1
    ///
    /// // `..., 1]` and `[1, ...` meet in 1: they coincide.
    /// assert_eq!(up_closed.boundary_cmp(&lo_closed), Ordering::Equal);
    /// // `..., 1)` and `(1, ...` share no point: strictly apart.
    /// assert_eq!(up_open.boundary_cmp(&lo_open), Ordering::Less);
    /// // One closed side is enough to supply the shared point.
    /// assert_eq!(up_open.boundary_cmp(&lo_closed), Ordering::Equal);
    /// ```
    pub fn boundary_cmp(&self, other: &Self) -> Ordering {
        match self.value.cmp(&other.value) {
            Ordering::Equal => self.break_tie(other),
            ord => ord,
        }
    }

    /// Tie-break for boundaries at the same value.
    fn break_tie(&self, other: &Self) -> Ordering {
        match (self.side, other.side) {
            (Side::Upper, Side::Upper) => match (self.open, other.open) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            },
            (Side::Lower, Side::Lower) => match (self.open, other.open) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => Ordering::Equal,
            },
            (Side::Upper, Side::Lower) => {
                if self.open && other.open {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            }
            (Side::Lower, Side::Upper) => {
                if self.open && other.open {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        }
    }

    /// Returns `true` if this boundary sorts strictly before `other`.
    #[inline]
    pub fn strictly_before(&self, other: &Self) -> bool {
        self.boundary_cmp(other) == Ordering::Less
    }

    /// Returns `true` if this boundary sorts strictly after `other`.
    #[inline]
    pub fn strictly_after(&self, other: &Self) -> bool {
        self.boundary_cmp(other) == Ordering::Greater
    }

    /// Returns `true` if the two boundaries coincide under the touching
    /// rule.
    #[inline]
    pub fn coincides(&self, other: &Self) -> bool {
        self.boundary_cmp(other) == Ordering::Equal
    }

    /// Returns `true` if this boundary sorts at or before `other`.
    #[inline]
    pub fn at_or_before(&self, other: &Self) -> bool {
        self.boundary_cmp(other) != Ordering::Greater
    }

    /// Returns `true` if this boundary sorts at or after `other`.
    #[inline]
    pub fn at_or_after(&self, other: &Self) -> bool {
        self.boundary_cmp(other) != Ordering::Less
    }

    /// Returns the later of two boundaries, preferring `self` on a tie.
    #[inline]
    #[must_use]
    pub fn max_by_boundary(self, other: Self) -> Self {
        if other.strictly_after(&self) { other } else { self }
    }

    /// Returns the earlier of two boundaries, preferring `self` on a tie.
    #[inline]
    #[must_use]
    pub fn min_by_boundary(self, other: Self) -> Self {
        if other.strictly_before(&self) { other } else { self }
    }
}

impl<T: fmt::Display> fmt::Display for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::Lower => {
                f.write_str(if self.open { "(" } else { "[" })?;
                self.value.fmt(f)
            }
            Side::Upper => {
                self.value.fmt(f)?;
                f.write_str(if self.open { ")" } else { "]" })
            }
        }
    }
}
