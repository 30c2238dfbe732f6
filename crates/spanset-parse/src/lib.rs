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

//! # Spanset Parse
//!
//! Textual notation for the `spanset-core` algebra. This crate turns strings
//! like `"[-3, 2]"`, `"(0, ∞)"`, or a bare numeric literal into validated
//! core values, and is the only layer that ever looks at text: the core
//! receives already-validated endpoint triples and nothing else.
//!
//! ## Modules
//!
//! - `number`: Numeric literal conversion into extended domain values,
//!   including the infinity sentinels `∞`/`oo` and `-∞`/`-oo`.
//! - `notation`: Interval and interval-set notation — bracket forms,
//!   singleton braces, the universal `R`, the empty `Ø`, and ` U `-joined
//!   set notation.
//!
//! ## Error Reporting
//!
//! Every fallible surface has a typed error implementing `Display`,
//! `std::error::Error`, and `From` conversions, so callers can bubble the
//! errors with `?` and still point at the offending token. Interval
//! validation is never bypassed: a notation that scans correctly but
//! describes an empty range (such as `"(2, 2)"`) surfaces the core's
//! construction error.

pub mod notation;
pub mod number;
