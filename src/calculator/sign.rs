//! The ± key.

use tracing::trace;

use super::error::CalcError;
use super::evaluation::CalcResult;
use super::operand::parse_operand;

/// Flip the sign of operand text.
///
/// Works on the text, so partially typed input like `"5."` keeps its shape.
/// Zero never gains a minus sign.
pub fn toggle_sign(operand: &str) -> CalcResult<String> {
    let value = match parse_operand(operand) {
        Ok(v) => v,
        Err(err) => {
            trace!(%err, "cannot toggle sign");
            return CalcError::invalid_input("Invalid number").into();
        }
    };

    let text = operand.trim();
    let toggled = match text.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None if value == 0.0 => text.to_string(),
        None => format!("-{}", text),
    };

    CalcResult::Success {
        display: toggled.clone(),
        value: toggled,
    }
}
