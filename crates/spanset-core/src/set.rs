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

//! # Interval Sets
//!
//! A normalized union of ranges: an ordered collection of mutually disjoint,
//! non-touching intervals, sorted by lower boundary. The three set-algebra
//! operations — union, intersection, and relative complement — consume one
//! or two sets and produce a new normalized set; operands are never mutated.
//!
//! ## Invariant
//!
//! For any two consecutive intervals `i`, `j` in a set, `i.upper` sorts
//! strictly before `j.lower` in the boundary order: no overlap and no silent
//! adjacency. The flattening constructor sorts but deliberately does not
//! merge; callers hand it already-disjoint intervals, and every operation in
//! this module maintains the invariant in its output. `union` is the one
//! entry point that merges arbitrary overlapping input.

use crate::bound::Extended;
use crate::interval::Interval;
use num_traits::Zero;
use smallvec::SmallVec;
use std::fmt;
use std::ops::Sub;

/// A sorted, disjoint collection of intervals.
///
/// The empty set is a valid, representable value and renders as `Ø`.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::interval::{Interval, IntervalError};
/// # use spanset_core::set::IntervalSet;
///
/// let a = IntervalSet::from(Interval::closed(-3, 2)?);
/// let c = IntervalSet::from(Interval::closed_open(0, 3)?);
///
/// assert_eq!(a.union(&c).to_string(), "[-3, 3)");
/// assert_eq!(a.intersection(&c).to_string(), "[0, 2]");
/// assert_eq!(c.difference(&a).to_string(), "(2, 3)");
/// # Ok::<(), IntervalError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T> IntervalSet<T> {
    /// Creates the empty set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Returns `true` if the set contains no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the number of disjoint intervals in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns the intervals of the set, sorted by lower boundary.
    #[inline]
    pub fn intervals(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Returns an iterator over the intervals of the set.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }
}

impl<T: Ord> IntervalSet<T> {
    /// Creates a set from a sequence of intervals, sorting them by lower
    /// boundary.
    ///
    /// The input is flattened and sorted but **not** merged: callers must
    /// pass mutually disjoint, non-touching intervals. Sets produced by the
    /// operations of this module always satisfy that precondition; arbitrary
    /// overlapping input belongs in [`union`](Self::union) instead.
    pub fn from_intervals<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        let mut intervals: Vec<_> = intervals.into_iter().collect();
        intervals.sort_by(|a, b| a.lower().boundary_cmp(b.lower()));
        Self { intervals }
    }

    /// Checks whether the intervals are sorted by lower boundary with every
    /// consecutive pair strictly apart.
    ///
    /// This is the representation invariant of the set; operation outputs
    /// assert it in debug builds.
    pub fn is_disjoint_and_sorted(&self) -> bool {
        self.intervals
            .windows(2)
            .all(|w| w[0].upper().strictly_before(w[1].lower()))
    }

    /// Returns `true` if `point` lies in some interval of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::{Interval, IntervalError};
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let set = IntervalSet::from_intervals([
    ///     Interval::closed(0, 1)?,
    ///     Interval::open(5, 7)?,
    /// ]);
    /// assert!(set.contains_point(&1));
    /// assert!(set.contains_point(&6));
    /// assert!(!set.contains_point(&5));
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn contains_point(&self, point: &T) -> bool {
        self.intervals.iter().any(|iv| iv.contains_point(point))
    }

    /// Computes the union of two sets.
    ///
    /// All intervals of both operands are sorted by lower boundary and swept
    /// left to right with a running accumulator; an interval whose lower
    /// boundary sorts at or before the running upper boundary extends the
    /// accumulator, anything else flushes it. The at-or-before test captures
    /// genuine overlap as well as touching boundaries where at least one
    /// side is closed, so the result is maximally merged: no two returned
    /// intervals touch or overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::{Interval, IntervalError};
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let a = IntervalSet::from(Interval::closed(0, 1)?);
    ///
    /// // A shared closed boundary merges...
    /// let touching = IntervalSet::from(Interval::open_closed(1, 2)?);
    /// assert_eq!(a.union(&touching).to_string(), "[0, 2]");
    ///
    /// // ...but two open boundaries at the same value stay apart.
    /// let b = IntervalSet::from(Interval::closed_open(0, 1)?);
    /// let apart = IntervalSet::from(Interval::open_closed(1, 2)?);
    /// assert_eq!(b.union(&apart).to_string(), "[0, 1) U (1, 2]");
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut merged: Vec<Interval<T>> = self
            .intervals
            .iter()
            .chain(other.intervals.iter())
            .cloned()
            .collect();
        merged.sort_by(|a, b| a.lower().boundary_cmp(b.lower()));

        let mut merged = merged.into_iter();
        // Both operands empty: there is no accumulator to seed.
        let Some(first) = merged.next() else {
            return Self::new();
        };

        let mut disjoint = Vec::new();
        let (mut current_lower, mut current_upper) = first.into_endpoints();
        for interval in merged {
            let (lower, upper) = interval.into_endpoints();
            if lower.at_or_before(&current_upper) {
                current_upper = current_upper.max_by_boundary(upper);
                current_lower = current_lower.min_by_boundary(lower);
            } else {
                disjoint.push(Interval::from_endpoints_unchecked(
                    current_lower,
                    current_upper,
                ));
                current_lower = lower;
                current_upper = upper;
            }
        }
        disjoint.push(Interval::from_endpoints_unchecked(
            current_lower,
            current_upper,
        ));

        let result = Self {
            intervals: disjoint,
        };
        debug_assert!(result.is_disjoint_and_sorted());
        result
    }

    /// Computes the intersection of two sets.
    ///
    /// Every overlapping pair of intervals contributes the range between the
    /// later lower boundary and the earlier upper boundary; pairs whose clip
    /// would be empty (coincident boundaries with an open side) are skipped.
    /// Because the intervals within each operand are disjoint, the clips are
    /// disjoint by construction and only need sorting. The cost is O(n·m) in
    /// the operand sizes, which real-world interval sets keep small.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::{Interval, IntervalError};
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let b = IntervalSet::from(Interval::open(-2, 2)?);
    /// let c = IntervalSet::from(Interval::closed_open(0, 3)?);
    /// assert_eq!(b.intersection(&c).to_string(), "[0, 2)");
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut clipped = Vec::new();
        for interval in &self.intervals {
            for other_interval in &other.intervals {
                if !interval.overlaps(other_interval) {
                    continue;
                }
                let lower = interval
                    .lower()
                    .clone()
                    .max_by_boundary(other_interval.lower().clone());
                let upper = interval
                    .upper()
                    .clone()
                    .min_by_boundary(other_interval.upper().clone());
                // A clip collapsing onto an open boundary is empty: skip it.
                if let Ok(clip) = Interval::new(lower, upper) {
                    clipped.push(clip);
                }
            }
        }
        Self::from_intervals(clipped)
    }

    /// Computes the relative complement: the part of this set not covered by
    /// `other`.
    ///
    /// Each interval runs through the subtrahend with a running worklist of
    /// surviving fragments, carving with
    /// [`Interval::subtract`](crate::interval::Interval::subtract) at every
    /// step. The output is therefore disjoint by construction, even when
    /// several subtrahend intervals overlap the same interval of this set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::{Interval, IntervalError};
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let a = IntervalSet::from(Interval::closed(-3, 2)?);
    /// let b = IntervalSet::from(Interval::open(-2, 2)?);
    ///
    /// assert_eq!(a.difference(&b).to_string(), "[-3, -2] U {2}");
    /// assert_eq!(b.difference(&a).to_string(), "Ø");
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        if self.is_empty() {
            return Self::new();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut remaining = Vec::new();
        for interval in &self.intervals {
            let mut fragments: SmallVec<[Interval<T>; 2]> =
                smallvec::smallvec![interval.clone()];
            for other_interval in &other.intervals {
                if fragments.is_empty() {
                    break;
                }
                fragments = fragments
                    .iter()
                    .flat_map(|fragment| fragment.subtract(other_interval))
                    .collect();
            }
            remaining.extend(fragments);
        }

        let result = Self::from_intervals(remaining);
        debug_assert!(result.is_disjoint_and_sorted());
        result
    }

    /// Returns the total width of the set, or `PosInfinity` when any
    /// interval is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::bound::Extended;
    /// # use spanset_core::interval::{Interval, IntervalError};
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let set = IntervalSet::from_intervals([
    ///     Interval::closed(0, 3)?,
    ///     Interval::open(10, 14)?,
    /// ]);
    /// assert_eq!(set.measure(), Extended::Finite(7));
    /// # Ok::<(), IntervalError>(())
    /// ```
    pub fn measure(&self) -> Extended<T>
    where
        T: Clone + Sub<Output = T> + Zero,
    {
        let mut total = T::zero();
        for interval in &self.intervals {
            match interval.width() {
                Extended::Finite(width) => total = total + width,
                unbounded => return unbounded,
            }
        }
        Extended::Finite(total)
    }
}

impl<T> Default for IntervalSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Interval<T>> for IntervalSet<T> {
    /// Wraps a single interval as a one-element set. This is the explicit
    /// conversion point for callers holding a bare [`Interval`].
    #[inline]
    fn from(interval: Interval<T>) -> Self {
        Self {
            intervals: vec![interval],
        }
    }
}

impl<T: Ord> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_intervals(iter)
    }
}

impl<T: Ord> FromIterator<IntervalSet<T>> for IntervalSet<T> {
    /// Flattens nested sets into one, sorting the combined intervals.
    ///
    /// Like [`from_intervals`](IntervalSet::from_intervals) this does not
    /// merge; the inputs must be mutually disjoint.
    fn from_iter<I: IntoIterator<Item = IntervalSet<T>>>(iter: I) -> Self {
        Self::from_intervals(iter.into_iter().flat_map(|set| set.intervals))
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T> fmt::Display for IntervalSet<T>
where
    T: fmt::Display + PartialEq,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return f.write_str("Ø");
        }
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(" U ")?;
            }
            interval.fmt(f)?;
        }
        Ok(())
    }
}
