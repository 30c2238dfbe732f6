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

//! # Spanset Core
//!
//! Interval-set algebra over a dense, totally ordered domain. This crate
//! models sets of intervals whose boundaries may be open or closed at either
//! end and may extend to unbounded limits, and implements union,
//! intersection, and relative complement over them, always normalizing
//! results to a canonical disjoint, sorted representation.
//!
//! ## Modules
//!
//! - `bound`: Extended domain values (`-∞`/finite/`∞`), boundary sides, and
//!   the `Endpoint` type together with the boundary ordering every higher
//!   layer depends on — including the touching rule that decides whether two
//!   boundaries meeting at the same value coincide or stay apart.
//! - `interval`: A single contiguous, non-empty range between two validated
//!   endpoints. Construction is the only validation gate; invalid pairings
//!   fail eagerly with a typed error.
//! - `set`: Sorted, disjoint collections of intervals with the three
//!   set-algebra operations, point queries, measurement, and human-readable
//!   rendering.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Intervals validate on construction; the algebra never
//!     has to re-check well-formedness mid-flight.
//! 2.  **Immutability**: Operations never mutate their operands. Every result
//!     is a freshly constructed, normalized value, so sets can be shared
//!     across threads without synchronization.
//! 3.  **One ordering**: All merge, clip, and carve decisions reduce to the
//!     single boundary comparison defined in `bound`, which is the component
//!     most prone to subtle bugs and therefore the most heavily tested.

pub mod bound;
pub mod interval;
pub mod set;
