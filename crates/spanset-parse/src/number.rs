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

//! Numeric literal conversion into extended domain values.

use spanset_core::bound::Extended;
use std::fmt;
use std::str::FromStr;

/// Details about a token that could not be converted into a domain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNumberError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseNumberError {}

/// Converts a numeric token into an extended domain value.
///
/// The infinity sentinels `∞` and `oo` map to
/// [`Extended::PosInfinity`], `-∞` and `-oo` to
/// [`Extended::NegInfinity`]; everything else is handed to `T::from_str`.
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns a [`ParseNumberError`] carrying the offending token when
/// `T::from_str` rejects it.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::bound::Extended;
/// # use spanset_parse::number::parse_extended;
///
/// assert_eq!(parse_extended::<i64>("-3"), Ok(Extended::Finite(-3)));
/// assert_eq!(parse_extended::<i64>("∞"), Ok(Extended::PosInfinity));
/// assert_eq!(parse_extended::<i64>("-oo"), Ok(Extended::NegInfinity));
/// assert!(parse_extended::<i64>("three").is_err());
/// ```
pub fn parse_extended<T: FromStr>(token: &str) -> Result<Extended<T>, ParseNumberError> {
    let token = token.trim();
    match token {
        "∞" | "oo" => Ok(Extended::PosInfinity),
        "-∞" | "-oo" => Ok(Extended::NegInfinity),
        _ => token
            .parse::<T>()
            .map(Extended::Finite)
            .map_err(|_| ParseNumberError {
                token: token.to_string(),
                type_name: std::any::type_name::<T>(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_values() {
        assert_eq!(parse_extended::<i64>("42"), Ok(Extended::Finite(42)));
        assert_eq!(parse_extended::<i64>(" -3 "), Ok(Extended::Finite(-3)));
        assert_eq!(parse_extended::<f64>("2.5"), Ok(Extended::Finite(2.5)));
    }

    #[test]
    fn test_infinity_sentinels() {
        assert_eq!(parse_extended::<i64>("∞"), Ok(Extended::PosInfinity));
        assert_eq!(parse_extended::<i64>("oo"), Ok(Extended::PosInfinity));
        assert_eq!(parse_extended::<i64>("-∞"), Ok(Extended::NegInfinity));
        assert_eq!(parse_extended::<i64>("-oo"), Ok(Extended::NegInfinity));
        assert_eq!(parse_extended::<i64>("  oo  "), Ok(Extended::PosInfinity));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_extended::<i64>("three").unwrap_err();
        assert_eq!(err.token, "three");
        assert_eq!(err.type_name, "i64");
        assert!(err.to_string().contains("'three'"));

        assert!(parse_extended::<i64>("").is_err());
        assert!(parse_extended::<i64>("2.5").is_err());
    }
}
