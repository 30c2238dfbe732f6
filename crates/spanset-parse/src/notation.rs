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

//! Interval and interval-set notation.
//!
//! The accepted interval forms mirror what the core renders:
//!
//! ```raw
//! [-3, 2]      closed
//! (-2, 2)      open
//! [0, 3)       half-open (either side)
//! (-∞, 4)      unbounded boundaries via the infinity sentinels
//! 5            a bare literal, the singleton [5, 5]
//! {5}          the singleton in brace notation
//! R            the universal interval (-∞, ∞)
//! ```
//!
//! A set notation is either `Ø` (or the empty string) or interval notations
//! joined by `U` separators; the pieces are combined with `union`, so the
//! parsed set comes back normalized even if the notation overlaps.

use crate::number::{parse_extended, ParseNumberError};
use spanset_core::bound::{Endpoint, Extended};
use spanset_core::interval::{Interval, IntervalError};
use spanset_core::set::IntervalSet;
use std::fmt;
use std::str::FromStr;

/// The error type for interval-notation parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNotationError {
    /// The notation was empty where an interval was expected.
    EmptyNotation,
    /// A boundary token could not be converted into a domain value.
    Number(ParseNumberError),
    /// The notation has no `,` separating its boundaries.
    MissingSeparator,
    /// The notation does not start with `[`/`(` or does not end with
    /// `]`/`)`.
    MalformedBracket,
    /// The boundaries scanned correctly but describe an invalid interval.
    Interval(IntervalError),
}

impl fmt::Display for ParseNotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNotation => write!(f, "Interval notation is empty"),
            Self::Number(e) => write!(f, "Invalid boundary value: {}", e),
            Self::MissingSeparator => {
                write!(f, "Interval notation must contain a ',' between its boundaries")
            }
            Self::MalformedBracket => {
                write!(f, "Interval notation must start with '[' or '(' and end with ']' or ')'")
            }
            Self::Interval(e) => write!(f, "Invalid interval: {}", e),
        }
    }
}

impl std::error::Error for ParseNotationError {}

impl From<ParseNumberError> for ParseNotationError {
    fn from(e: ParseNumberError) -> Self {
        Self::Number(e)
    }
}

impl From<IntervalError> for ParseNotationError {
    fn from(e: IntervalError) -> Self {
        Self::Interval(e)
    }
}

/// Parses a single interval notation.
///
/// Accepts the bracket forms, a bare numeric literal or `{v}` for the
/// singleton `[v, v]`, and `R` for the universal interval. Whitespace around
/// the notation and around each boundary value is ignored. Interval
/// validation is never bypassed: an empty range like `(2, 2)` fails with the
/// core's construction error.
///
/// # Errors
///
/// Returns a [`ParseNotationError`] describing the first offending piece of
/// the notation.
///
/// # Examples
///
/// ```rust
/// # use spanset_parse::notation::parse_interval;
///
/// assert_eq!(parse_interval::<i64>("[-3, 2]")?.to_string(), "[-3, 2]");
/// assert_eq!(parse_interval::<i64>("( -2, 2 )")?.to_string(), "(-2, 2)");
/// assert_eq!(parse_interval::<i64>("5")?.to_string(), "{5}");
/// assert_eq!(parse_interval::<i64>("(-oo, 4]")?.to_string(), "(-∞, 4]");
/// assert!(parse_interval::<i64>("(2, 2)").is_err());
/// # Ok::<(), spanset_parse::notation::ParseNotationError>(())
/// ```
pub fn parse_interval<T>(input: &str) -> Result<Interval<T>, ParseNotationError>
where
    T: FromStr + Ord + Clone,
{
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseNotationError::EmptyNotation);
    }
    if input == "R" {
        return Ok(Interval::full());
    }
    if let Some(stripped) = input
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return singleton(parse_extended::<T>(stripped)?);
    }
    // A bare literal is the degenerate singleton interval.
    if let Ok(value) = parse_extended::<T>(input) {
        return singleton(value);
    }

    let (head, tail) = input
        .split_once(',')
        .ok_or(ParseNotationError::MissingSeparator)?;
    let head = head.trim();
    let tail = tail.trim();

    let lower_open = match head.chars().next() {
        Some('[') => false,
        Some('(') => true,
        _ => return Err(ParseNotationError::MalformedBracket),
    };
    let upper_open = match tail.chars().last() {
        Some(']') => false,
        Some(')') => true,
        _ => return Err(ParseNotationError::MalformedBracket),
    };

    // The brackets are single-byte ASCII, so slicing them off is safe.
    let lower_value = parse_extended::<T>(&head[1..])?;
    let upper_value = parse_extended::<T>(&tail[..tail.len() - 1])?;

    Interval::new(
        Endpoint::lower(lower_value, lower_open),
        Endpoint::upper(upper_value, upper_open),
    )
    .map_err(ParseNotationError::Interval)
}

fn singleton<T>(value: Extended<T>) -> Result<Interval<T>, ParseNotationError>
where
    T: Ord + Clone,
{
    Interval::new(
        Endpoint::lower(value.clone(), false),
        Endpoint::upper(value, false),
    )
    .map_err(ParseNotationError::Interval)
}

/// Parses an interval-set notation.
///
/// `Ø` (or a blank string) is the empty set; otherwise the input is interval
/// notations joined by `U`. The pieces are combined with `union`, so the
/// result is normalized even when the notation lists overlapping or touching
/// intervals.
///
/// # Errors
///
/// Returns the [`ParseNotationError`] of the first piece that fails.
///
/// # Examples
///
/// ```rust
/// # use spanset_parse::notation::parse_interval_set;
///
/// let set = parse_interval_set::<i64>("[-3, -2] U {2}")?;
/// assert_eq!(set.to_string(), "[-3, -2] U {2}");
///
/// assert!(parse_interval_set::<i64>("Ø")?.is_empty());
///
/// // Overlapping notation comes back normalized.
/// let merged = parse_interval_set::<i64>("[0, 2] U [1, 5]")?;
/// assert_eq!(merged.to_string(), "[0, 5]");
/// # Ok::<(), spanset_parse::notation::ParseNotationError>(())
/// ```
pub fn parse_interval_set<T>(input: &str) -> Result<IntervalSet<T>, ParseNotationError>
where
    T: FromStr + Ord + Clone,
{
    let input = input.trim();
    if input.is_empty() || input == "Ø" {
        return Ok(IntervalSet::new());
    }

    let mut result = IntervalSet::new();
    for piece in input.split('U') {
        let interval = parse_interval::<T>(piece)?;
        result = result.union(&IntervalSet::from(interval));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_forms() {
        assert_eq!(parse_interval::<i64>("[-3, 2]").unwrap().to_string(), "[-3, 2]");
        assert_eq!(parse_interval::<i64>("(-2, 2)").unwrap().to_string(), "(-2, 2)");
        assert_eq!(parse_interval::<i64>("[0, 3)").unwrap().to_string(), "[0, 3)");
        assert_eq!(parse_interval::<i64>("(0, 3]").unwrap().to_string(), "(0, 3]");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(
            parse_interval::<i64>("  [ -3 ,  2 ]  ").unwrap().to_string(),
            "[-3, 2]"
        );
    }

    #[test]
    fn test_bare_literal_and_braces() {
        assert_eq!(parse_interval::<i64>("5").unwrap().to_string(), "{5}");
        assert_eq!(parse_interval::<i64>("{5}").unwrap().to_string(), "{5}");
        assert_eq!(parse_interval::<i64>("-7").unwrap().to_string(), "{-7}");
    }

    #[test]
    fn test_universal_and_infinite_boundaries() {
        assert_eq!(parse_interval::<i64>("R").unwrap(), Interval::full());
        assert_eq!(
            parse_interval::<i64>("(-∞, 4)").unwrap().to_string(),
            "(-∞, 4)"
        );
        assert_eq!(
            parse_interval::<i64>("(-oo, oo)").unwrap(),
            Interval::full()
        );
        assert_eq!(
            parse_interval::<i64>("[0, ∞)").unwrap().to_string(),
            "[0, ∞)"
        );
    }

    #[test]
    fn test_rejects_malformed_notation() {
        assert_eq!(
            parse_interval::<i64>(""),
            Err(ParseNotationError::EmptyNotation)
        );
        assert_eq!(
            parse_interval::<i64>("[0 3]"),
            Err(ParseNotationError::MissingSeparator)
        );
        assert_eq!(
            parse_interval::<i64>("<0, 3]"),
            Err(ParseNotationError::MalformedBracket)
        );
        assert_eq!(
            parse_interval::<i64>("[0, 3>"),
            Err(ParseNotationError::MalformedBracket)
        );
        assert!(matches!(
            parse_interval::<i64>("[zero, 3]"),
            Err(ParseNotationError::Number(_))
        ));
    }

    #[test]
    fn test_rejects_empty_intervals() {
        assert_eq!(
            parse_interval::<i64>("(2, 2)"),
            Err(ParseNotationError::Interval(IntervalError::EmptyInterval))
        );
        assert_eq!(
            parse_interval::<i64>("[3, 1]"),
            Err(ParseNotationError::Interval(IntervalError::EmptyInterval))
        );
    }

    #[test]
    fn test_set_notation() {
        assert!(parse_interval_set::<i64>("Ø").unwrap().is_empty());
        assert!(parse_interval_set::<i64>("  ").unwrap().is_empty());

        let set = parse_interval_set::<i64>("[-3, -2] U {2}").unwrap();
        assert_eq!(set.to_string(), "[-3, -2] U {2}");
        assert_eq!(set.len(), 2);

        // Union normalizes overlapping notation.
        let merged = parse_interval_set::<i64>("[0, 2] U [1, 5] U (6, 7)").unwrap();
        assert_eq!(merged.to_string(), "[0, 5] U (6, 7)");
    }

    #[test]
    fn test_set_notation_propagates_piece_errors() {
        assert!(parse_interval_set::<i64>("[0, 1] U ").is_err());
        assert!(matches!(
            parse_interval_set::<i64>("[0, 1] U (2, 2)"),
            Err(ParseNotationError::Interval(IntervalError::EmptyInterval))
        ));
    }

    #[test]
    fn test_roundtrip_through_display() {
        for notation in ["[-3, 2]", "(-2, 2)", "[0, 3)", "{2}", "R", "(-∞, 4)"] {
            let parsed = parse_interval::<i64>(notation).unwrap();
            assert_eq!(parsed.to_string(), notation);
        }
    }
}
