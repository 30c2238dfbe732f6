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

//! # Intervals
//!
//! A single contiguous, non-empty range between a validated lower and upper
//! boundary. Construction is the only validation gate in the crate: once an
//! `Interval` exists, every operation may assume its endpoints are on the
//! correct sides and enclose at least one point.

use crate::bound::{Endpoint, Extended, Side};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// The error type for interval construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
    /// The endpoints were supplied on the wrong sides.
    InvertedOrder,
    /// The range between the endpoints contains no points: the boundaries
    /// coincide with at least one side open, or the lower boundary sorts
    /// strictly after the upper one.
    EmptyInterval,
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedOrder => {
                write!(f, "Interval boundaries must be supplied in lower, upper order")
            }
            Self::EmptyInterval => write!(f, "Interval contains no points"),
        }
    }
}

impl std::error::Error for IntervalError {}

/// A single contiguous range between two boundaries.
///
/// Intervals are immutable: the set-algebra operations read them and
/// allocate new values, never mutate. The degenerate single-point interval
/// `[v, v]` is valid; every other coincident-boundary pairing is rejected at
/// construction.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::interval::{Interval, IntervalError};
///
/// let iv = Interval::closed_open(0, 3)?; // [0, 3)
/// assert!(iv.contains_point(&0));
/// assert!(!iv.contains_point(&3));
///
/// // A coincident open boundary encloses nothing.
/// assert_eq!(Interval::open(2, 2), Err(IntervalError::EmptyInterval));
/// # Ok::<(), IntervalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: Endpoint<T>,
    upper: Endpoint<T>,
}

impl<T: Ord> Interval<T> {
    /// Creates an interval from a lower and an upper boundary.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::InvertedOrder`] if `lower` is not a `Lower`-side
    ///   endpoint or `upper` is not an `Upper`-side one.
    /// - [`IntervalError::EmptyInterval`] if the enclosed range has no
    ///   points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::bound::{Endpoint, Extended};
    /// # use spanset_core::interval::{Interval, IntervalError};
    ///
    /// let lower = Endpoint::lower(Extended::Finite(-3), false);
    /// let upper = Endpoint::upper(Extended::Finite(2), false);
    /// let iv = Interval::new(lower, upper)?;
    /// assert_eq!(iv.to_string(), "[-3, 2]");
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn new(lower: Endpoint<T>, upper: Endpoint<T>) -> Result<Self, IntervalError> {
        Self::validate(&lower, &upper)?;
        Ok(Self { lower, upper })
    }

    /// Creates an interval without validating in release builds.
    ///
    /// Reserved for operation results whose well-formedness is guaranteed by
    /// the algorithm that produced the endpoints.
    pub(crate) fn from_endpoints_unchecked(lower: Endpoint<T>, upper: Endpoint<T>) -> Self {
        debug_assert!(
            Self::validate(&lower, &upper).is_ok(),
            "operation produced an invalid interval"
        );
        Self { lower, upper }
    }

    fn validate(lower: &Endpoint<T>, upper: &Endpoint<T>) -> Result<(), IntervalError> {
        if lower.side() != Side::Lower || upper.side() != Side::Upper {
            return Err(IntervalError::InvertedOrder);
        }
        match lower.boundary_cmp(upper) {
            Ordering::Greater => Err(IntervalError::EmptyInterval),
            Ordering::Equal if lower.is_open() || upper.is_open() => {
                Err(IntervalError::EmptyInterval)
            }
            _ => Ok(()),
        }
    }

    /// Creates the closed interval `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if `a > b`.
    #[inline]
    pub fn closed(a: T, b: T) -> Result<Self, IntervalError> {
        Self::new(
            Endpoint::lower(Extended::Finite(a), false),
            Endpoint::upper(Extended::Finite(b), false),
        )
    }

    /// Creates the open interval `(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if `a >= b`.
    #[inline]
    pub fn open(a: T, b: T) -> Result<Self, IntervalError> {
        Self::new(
            Endpoint::lower(Extended::Finite(a), true),
            Endpoint::upper(Extended::Finite(b), true),
        )
    }

    /// Creates the half-open interval `[a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if `a >= b`.
    #[inline]
    pub fn closed_open(a: T, b: T) -> Result<Self, IntervalError> {
        Self::new(
            Endpoint::lower(Extended::Finite(a), false),
            Endpoint::upper(Extended::Finite(b), true),
        )
    }

    /// Creates the half-open interval `(a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyInterval`] if `a >= b`.
    #[inline]
    pub fn open_closed(a: T, b: T) -> Result<Self, IntervalError> {
        Self::new(
            Endpoint::lower(Extended::Finite(a), true),
            Endpoint::upper(Extended::Finite(b), false),
        )
    }

    /// Creates the degenerate single-point interval `[v, v]`, rendered as
    /// `{v}`.
    #[inline]
    pub fn point(v: T) -> Self
    where
        T: Clone,
    {
        Self {
            lower: Endpoint::lower(Extended::Finite(v.clone()), false),
            upper: Endpoint::upper(Extended::Finite(v), false),
        }
    }

    /// Creates the universal interval `(-∞, ∞)`, rendered as `R`.
    #[inline]
    pub fn full() -> Self {
        Self {
            lower: Endpoint::lower(Extended::NegInfinity, true),
            upper: Endpoint::upper(Extended::PosInfinity, true),
        }
    }

    /// Returns `true` if this interval and `other` share at least one
    /// boundary-order position, i.e. they overlap or touch on a closed
    /// boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::{Interval, IntervalError};
    ///
    /// let a = Interval::closed(0, 2)?;
    /// assert!(a.overlaps(&Interval::closed(2, 5)?)); // touch at a closed 2
    /// assert!(!a.overlaps(&Interval::open(2, 5)?));  // 2 is not shared
    /// # Ok::<(), IntervalError>(())
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower.at_or_before(&other.upper) && self.upper.at_or_after(&other.lower)
    }

    /// Returns `true` if `point` lies inside the interval.
    pub fn contains_point(&self, point: &T) -> bool {
        let above_lower = match self.lower.value() {
            Extended::NegInfinity => true,
            Extended::Finite(a) => {
                if self.lower.is_open() {
                    a < point
                } else {
                    a <= point
                }
            }
            Extended::PosInfinity => false,
        };
        let below_upper = match self.upper.value() {
            Extended::PosInfinity => true,
            Extended::Finite(b) => {
                if self.upper.is_open() {
                    point < b
                } else {
                    point <= b
                }
            }
            Extended::NegInfinity => false,
        };
        above_lower && below_upper
    }

    /// Subtracts `other` from this interval, returning the surviving
    /// fragments.
    ///
    /// # Returns
    ///
    /// A vector containing:
    /// * 0 fragments: if `other` fully covers this interval.
    /// * 1 fragment: if `other` clips one side, or does not overlap at all.
    /// * 2 fragments: if `other` is strictly contained, splitting this
    ///   interval in two.
    ///
    /// Fragments abut `other` without overlapping it: the carved boundary is
    /// the adjacent flip of the corresponding boundary of `other`, so the
    /// boundary value lands in exactly one of the two ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::{Interval, IntervalError};
    ///
    /// let base = Interval::closed(0, 10)?;
    /// let hole = Interval::closed(4, 6)?;
    ///
    /// let fragments = base.subtract(&hole);
    /// assert_eq!(fragments.len(), 2);
    /// assert_eq!(fragments[0].to_string(), "[0, 4)");
    /// assert_eq!(fragments[1].to_string(), "(6, 10]");
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn subtract(&self, other: &Self) -> SmallVec<[Self; 2]>
    where
        T: Clone,
    {
        if !self.overlaps(other) {
            return smallvec::smallvec![self.clone()];
        }

        let mut fragments = SmallVec::new();
        if self.lower.strictly_before(&other.lower) {
            // The part of this interval before `other` begins.
            fragments.push(Self::from_endpoints_unchecked(
                self.lower.clone(),
                other.lower.clone().into_adjacent_upper(),
            ));
        }
        if self.upper.strictly_after(&other.upper) {
            // The part of this interval after `other` ends.
            fragments.push(Self::from_endpoints_unchecked(
                other.upper.clone().into_adjacent_lower(),
                self.upper.clone(),
            ));
        }
        fragments
    }

    /// Returns the length of the interval, or `PosInfinity` when either
    /// boundary is unbounded.
    ///
    /// The openness of the boundaries does not affect the width: over a
    /// dense domain `[0, 1]` and `(0, 1)` measure the same.
    pub fn width(&self) -> Extended<T>
    where
        T: Clone + Sub<Output = T>,
    {
        match (self.lower.value(), self.upper.value()) {
            (Extended::Finite(a), Extended::Finite(b)) => Extended::Finite(b.clone() - a.clone()),
            _ => Extended::PosInfinity,
        }
    }
}

impl<T> Interval<T> {
    /// Returns the lower boundary.
    #[inline]
    pub const fn lower(&self) -> &Endpoint<T> {
        &self.lower
    }

    /// Returns the upper boundary.
    #[inline]
    pub const fn upper(&self) -> &Endpoint<T> {
        &self.upper
    }

    /// Consumes the interval and returns its boundaries.
    #[inline]
    pub fn into_endpoints(self) -> (Endpoint<T>, Endpoint<T>) {
        (self.lower, self.upper)
    }
}

impl<T> fmt::Display for Interval<T>
where
    T: fmt::Display + PartialEq,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self.lower.value(), Extended::NegInfinity)
            && matches!(self.upper.value(), Extended::PosInfinity)
        {
            return f.write_str("R");
        }
        if self.lower.value() == self.upper.value() {
            // Coincident boundaries survive construction only fully closed.
            return write!(f, "{{{}}}", self.lower.value());
        }
        write!(f, "{}, {}", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = Interval::closed(10, 20).unwrap();
        assert_eq!(iv.lower().value(), &Extended::Finite(10));
        assert_eq!(iv.upper().value(), &Extended::Finite(20));

        assert!(Interval::open(0, 1).is_ok());
        assert!(Interval::closed_open(0, 1).is_ok());
        assert!(Interval::open_closed(0, 1).is_ok());
    }

    #[test]
    fn test_construction_degenerate_point() {
        // `[v, v]` is the only valid coincident-boundary pairing.
        assert!(Interval::closed(5, 5).is_ok());
        assert_eq!(Interval::open(5, 5), Err(IntervalError::EmptyInterval));
        assert_eq!(
            Interval::closed_open(5, 5),
            Err(IntervalError::EmptyInterval)
        );
        assert_eq!(
            Interval::open_closed(5, 5),
            Err(IntervalError::EmptyInterval)
        );
    }

    #[test]
    fn test_construction_reversed_bounds() {
        assert_eq!(Interval::closed(3, 1), Err(IntervalError::EmptyInterval));
        assert_eq!(Interval::open(3, 1), Err(IntervalError::EmptyInterval));
    }

    #[test]
    fn test_construction_inverted_sides() {
        let lower = Endpoint::lower(Extended::Finite(1), false);
        let upper = Endpoint::upper(Extended::Finite(3), false);
        assert_eq!(
            Interval::new(upper, lower),
            Err(IntervalError::InvertedOrder)
        );

        // A single misplaced side is rejected as well.
        let also_lower = Endpoint::lower(Extended::Finite(3), false);
        assert_eq!(
            Interval::new(Endpoint::lower(Extended::Finite(1), false), also_lower),
            Err(IntervalError::InvertedOrder)
        );
    }

    #[test]
    fn test_overlaps() {
        let a = Interval::closed(0, 10).unwrap();

        assert!(a.overlaps(&Interval::closed(5, 15).unwrap()));
        assert!(a.overlaps(&Interval::closed(2, 8).unwrap()));
        assert!(a.overlaps(&a.clone()));
        // Touching on a closed boundary counts.
        assert!(a.overlaps(&Interval::closed(10, 15).unwrap()));
        assert!(a.overlaps(&Interval::open_closed(10, 15).unwrap()));
        // Touching with both sides open does not.
        let half = Interval::closed_open(0, 10).unwrap();
        assert!(!half.overlaps(&Interval::open(10, 15).unwrap()));
        // Gap.
        assert!(!a.overlaps(&Interval::closed(11, 15).unwrap()));
    }

    #[test]
    fn test_contains_point() {
        let iv = Interval::closed_open(0, 10).unwrap();
        assert!(iv.contains_point(&0));
        assert!(iv.contains_point(&9));
        assert!(!iv.contains_point(&10));
        assert!(!iv.contains_point(&-1));

        let unbounded = Interval::<i64>::full();
        assert!(unbounded.contains_point(&i64::MIN));
        assert!(unbounded.contains_point(&i64::MAX));

        let open = Interval::open(0, 10).unwrap();
        assert!(!open.contains_point(&0));
        assert!(open.contains_point(&1));
    }

    #[test]
    fn test_subtract_disjoint() {
        let base = Interval::closed(0, 10).unwrap();
        let fragments = base.subtract(&Interval::closed(12, 15).unwrap());
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0], base);
    }

    #[test]
    fn test_subtract_full_cover() {
        let base = Interval::closed(0, 10).unwrap();
        let fragments = base.subtract(&Interval::closed(-5, 15).unwrap());
        assert!(fragments.is_empty());

        // Exact cover removes everything too.
        assert!(base.subtract(&base.clone()).is_empty());
    }

    #[test]
    fn test_subtract_clips() {
        let base = Interval::closed(0, 10).unwrap();

        let fragments = base.subtract(&Interval::closed(8, 15).unwrap());
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].to_string(), "[0, 8)");

        let fragments = base.subtract(&Interval::open(8, 15).unwrap());
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].to_string(), "[0, 8]");

        let fragments = base.subtract(&Interval::closed(-5, 2).unwrap());
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].to_string(), "(2, 10]");
    }

    #[test]
    fn test_subtract_split() {
        let base = Interval::closed(0, 10).unwrap();
        let fragments = base.subtract(&Interval::open(4, 6).unwrap());
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].to_string(), "[0, 4]");
        assert_eq!(fragments[1].to_string(), "[6, 10]");
    }

    #[test]
    fn test_width() {
        assert_eq!(
            Interval::closed(3, 10).unwrap().width(),
            Extended::Finite(7)
        );
        assert_eq!(Interval::open(3, 10).unwrap().width(), Extended::Finite(7));
        assert_eq!(Interval::closed(5, 5).unwrap().width(), Extended::Finite(0));
        assert_eq!(Interval::<i64>::full().width(), Extended::PosInfinity);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::closed(-3, 2).unwrap().to_string(), "[-3, 2]");
        assert_eq!(Interval::open(-2, 2).unwrap().to_string(), "(-2, 2)");
        assert_eq!(Interval::closed_open(0, 3).unwrap().to_string(), "[0, 3)");
        assert_eq!(Interval::open_closed(0, 3).unwrap().to_string(), "(0, 3]");
        assert_eq!(Interval::point(2).to_string(), "{2}");
        assert_eq!(Interval::<i64>::full().to_string(), "R");

        let ray = Interval::new(
            Endpoint::lower(Extended::NegInfinity, true),
            Endpoint::upper(Extended::Finite(4), true),
        )
        .unwrap();
        assert_eq!(ray.to_string(), "(-∞, 4)");
    }

    #[test]
    fn test_error_display() {
        assert!(IntervalError::InvertedOrder.to_string().contains("order"));
        assert!(IntervalError::EmptyInterval.to_string().contains("no points"));
    }
}
