//! The percent key.
//!
//! What "N%" means depends on the operator waiting to combine it with the
//! base value:
//!
//! - `200 + 15%`: 15% *of the base*, so the amount is `30` and the caller
//!   goes on to compute `200 + 30`.
//! - `50 * 25%`: a plain fraction, so the amount is `0.25` and the caller
//!   goes on to compute `50 * 0.25`.

use tracing::debug;

use super::error::CalcError;
use super::evaluation::CalcResult;
use super::operand::parse_operand;
use super::operator::{Operator, OperatorCategory};
use super::validation::ValidationError;

/// Resolve `percent_value`% against `base_value` for `pending_operator`.
pub fn calculate_percentage(
    percent_value: &str,
    base_value: &str,
    pending_operator: &str,
) -> CalcResult {
    let percent = match parse_operand(percent_value) {
        Ok(v) => v,
        Err(_) => return CalcError::from(ValidationError::InvalidFirstOperand).into(),
    };
    let base = match parse_operand(base_value) {
        Ok(v) => v,
        Err(_) => return CalcError::from(ValidationError::InvalidSecondOperand).into(),
    };
    let operator: Operator = match pending_operator.parse() {
        Ok(op) => op,
        Err(_) => return CalcError::from(ValidationError::InvalidOperator).into(),
    };

    let fraction = percent / 100.0;
    let raw = match operator.category() {
        OperatorCategory::Additive => fraction * base,
        OperatorCategory::Multiplicative => fraction,
    };

    debug!(percent, base, %operator, raw, "resolved percentage");
    CalcResult::from_value(raw)
}
