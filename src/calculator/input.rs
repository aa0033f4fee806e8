//! Entry guards for the operand being typed.
//!
//! A keypad calls these before appending a key to the current operand so
//! that the text it passes to the engine is always well-formed.

use super::operand::is_valid_operand;
use super::operator::is_valid_operator;

/// Longest operand, in digits, a user can type.
pub const MAX_INPUT_DIGITS: usize = 15;

/// Check if a decimal point can be appended to `current`.
pub fn can_add_decimal(current: &str) -> bool {
    !current.contains('.')
}

/// Check if `digit` can be appended to `current`.
///
/// A lone zero is always replaceable, so it never counts against the limit.
pub fn can_add_digit(current: &str, digit: &str) -> bool {
    let mut chars = digit.chars();
    let is_single_digit =
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit());
    if !is_single_digit {
        return false;
    }

    if matches!(current, "0" | "-0") {
        return true;
    }

    digit_count(current) < MAX_INPUT_DIGITS
}

/// Check if `operator` can follow `current`.
pub fn can_add_operator(current: &str, operator: &str) -> bool {
    is_valid_operator(operator) && is_valid_operand(current)
}

fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}
