//! # Amount Module
//!
//! Parsing for the decimal amounts a receipt carries as text.
//!
//! ## Floating Point On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The scoring rules are defined over binary floating point:              │
//! │                                                                         │
//! │    "whole"    means   x - floor(x) == 0     (no epsilon)                │
//! │    "quarter"  means   (x / 0.25) is whole                              │
//! │    item bonus means   ceil(price * 0.2)                                │
//! │                                                                         │
//! │  Amounts are parsed into f64 and compared exactly, so results match    │
//! │  the rule definitions bit for bit (12.00 * 0.2 = 2.4000000000000004).  │
//! │  Totals that are not representable exactly are simply "not whole".     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ScoreError, ScoreResult};

/// Parses decimal amount text into an `f64`.
///
/// Accepts everything `f64::from_str` accepts: an optional sign, a fraction,
/// an exponent, `inf` and `nan`. Surrounding whitespace is not trimmed.
///
/// Finite text that overflows `f64` (`1e400`) is out of range and rejected;
/// only a literal `inf`/`infinity` parses to infinity.
///
/// `field` names the amount in the error (`total`, `items[0].price`).
///
/// ## Example
/// ```rust
/// use points_core::amount::parse_amount;
///
/// assert_eq!(parse_amount("total", "35.35").unwrap(), 35.35);
/// assert!(parse_amount("total", "abc").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ScoreResult<f64> {
    let invalid = || ScoreError::InvalidAmount {
        field: field.to_string(),
        value: text.to_string(),
    };

    let value = text.parse::<f64>().map_err(|_| invalid())?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(invalid());
    }

    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Checks whether a value has no fractional part.
///
/// Infinite and NaN values are never whole.
///
/// ## Example
/// ```rust
/// use points_core::amount::is_whole;
///
/// assert!(is_whole(100.0));
/// assert!(!is_whole(100.1));
/// ```
#[inline]
pub fn is_whole(value: f64) -> bool {
    value - value.floor() == 0.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("total", "9.00").unwrap(), 9.0);
        assert_eq!(parse_amount("total", "0").unwrap(), 0.0);
        assert_eq!(parse_amount("total", "-1.25").unwrap(), -1.25);
        assert_eq!(parse_amount("total", "+2.5").unwrap(), 2.5);
        assert_eq!(parse_amount("total", "1e2").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_amount_invalid() {
        let err = parse_amount("items[3].price", "12,50").unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidAmount {
                field: "items[3].price".to_string(),
                value: "12,50".to_string(),
            }
        );

        assert!(parse_amount("total", "").is_err());
        assert!(parse_amount("total", " 1.00").is_err());
        assert!(parse_amount("total", "$1.00").is_err());
    }

    #[test]
    fn test_parse_amount_out_of_range() {
        let err = parse_amount("total", "1e400").unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidAmount {
                field: "total".to_string(),
                value: "1e400".to_string(),
            }
        );
        assert!(parse_amount("items[0].price", "-1e400").is_err());

        // underflow rounds to zero, it is not out of range
        assert_eq!(parse_amount("total", "1e-400").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_amount_infinity_literals() {
        assert_eq!(parse_amount("total", "inf").unwrap(), f64::INFINITY);
        assert_eq!(parse_amount("total", "+Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_amount("total", "-INF").unwrap(), f64::NEG_INFINITY);
        assert!(parse_amount("total", "nan").unwrap().is_nan());
    }

    #[test]
    fn test_is_whole() {
        assert!(is_whole(0.0));
        assert!(is_whole(35.0));
        assert!(is_whole(-4.0));
        assert!(is_whole(400.0));

        assert!(!is_whole(35.35));
        assert!(!is_whole(-0.5));
        assert!(!is_whole(f64::INFINITY));
        assert!(!is_whole(f64::NAN));
    }
}
