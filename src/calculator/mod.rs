//! Calculator engine for two-operand arithmetic.
//!
//! This module provides functionality to:
//! - Validate an operand/operator/operand triple
//! - Evaluate it, classifying division by zero, overflow and bad input
//! - Resolve the percent key against the pending operator
//! - Toggle the sign of an operand
//! - Format results for display
//!
//! Every function is pure and never panics on user input.

mod error;
mod evaluation;
mod format;
mod input;
mod operand;
mod operator;
mod percentage;
mod sign;
mod validation;

pub use error::{CalcError, ErrorKind};
pub use evaluation::{CalcResult, safe_calculation};
pub use format::{
    ERROR_DISPLAY, SCIENTIFIC_LOWER, SCIENTIFIC_UPPER, format_result, round_to_display_precision,
};
pub use input::{MAX_INPUT_DIGITS, can_add_decimal, can_add_digit, can_add_operator};
pub use operand::{OperandError, is_valid_operand, parse_operand};
pub use operator::{Operator, OperatorCategory, UnknownOperator, is_valid_operator};
pub use percentage::calculate_percentage;
pub use sign::toggle_sign;
pub use validation::{ValidationError, ValidationResult, validate_calculation_input};
