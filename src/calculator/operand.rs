//! Operand parsing.
//!
//! Every component turns operand text into a number through [`parse_operand`],
//! so an operand accepted by the validator is exactly one the evaluator can use.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Optional minus, digits with at most one decimal point, optional exponent.
    /// The exponent lets formatted scientific results be fed back in.
    static ref OPERAND: Regex = Regex::new(
        r"^-?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$"
    ).unwrap();
}

/// Why operand text could not be used as a number.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("operand is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    Malformed(String),
    #[error("'{0}' is out of range")]
    NotFinite(String),
}

/// Parse operand text into a finite `f64`.
///
/// Surrounding whitespace is ignored. Words like `inf` or `NaN` and values
/// that overflow to infinity are rejected.
pub fn parse_operand(input: &str) -> Result<f64, OperandError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(OperandError::Empty);
    }

    if !OPERAND.is_match(trimmed) {
        return Err(OperandError::Malformed(trimmed.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| OperandError::Malformed(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(OperandError::NotFinite(trimmed.to_string()));
    }

    Ok(value)
}

/// Check whether operand text parses (see [`parse_operand`]).
pub fn is_valid_operand(input: &str) -> bool {
    parse_operand(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_operand("5"), Ok(5.0));
        assert_eq!(parse_operand("-5"), Ok(-5.0));
        assert_eq!(parse_operand("12.5"), Ok(12.5));
        assert_eq!(parse_operand("  42  "), Ok(42.0));
    }

    #[test]
    fn test_partial_decimals() {
        // The keypad produces "0." while the user is still typing
        assert_eq!(parse_operand("0."), Ok(0.0));
        assert_eq!(parse_operand("5."), Ok(5.0));
        assert_eq!(parse_operand(".5"), Ok(0.5));
        assert_eq!(parse_operand("-.25"), Ok(-0.25));
    }

    #[test]
    fn test_scientific_display_values() {
        assert_eq!(parse_operand("1.000000e+12"), Ok(1e12));
        assert_eq!(parse_operand("1.5e-7"), Ok(1.5e-7));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let value = parse_operand("-0").unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_malformed_rejected() {
        assert_eq!(parse_operand(""), Err(OperandError::Empty));
        assert_eq!(parse_operand("   "), Err(OperandError::Empty));
        assert!(matches!(parse_operand("abc"), Err(OperandError::Malformed(_))));
        assert!(matches!(parse_operand("1.2.3"), Err(OperandError::Malformed(_))));
        assert!(matches!(parse_operand("--5"), Err(OperandError::Malformed(_))));
        assert!(matches!(parse_operand("5-"), Err(OperandError::Malformed(_))));
        assert!(matches!(parse_operand("."), Err(OperandError::Malformed(_))));
        assert!(matches!(parse_operand("1,000"), Err(OperandError::Malformed(_))));
        assert!(matches!(parse_operand("Error"), Err(OperandError::Malformed(_))));
    }

    #[test]
    fn test_non_finite_words_rejected() {
        assert!(!is_valid_operand("inf"));
        assert!(!is_valid_operand("-infinity"));
        assert!(!is_valid_operand("NaN"));
    }

    #[test]
    fn test_overflowing_literal_rejected() {
        assert_eq!(
            parse_operand("1e999"),
            Err(OperandError::NotFinite("1e999".to_string()))
        );
    }
}
