//! Pre-flight validation of a calculation triple.

use thiserror::Error;
use tracing::trace;

use super::error::{CalcError, ErrorKind};
use super::operand::parse_operand;
use super::operator::Operator;

/// The first check a calculation triple failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First number is invalid")]
    InvalidFirstOperand,
    #[error("Invalid operator")]
    InvalidOperator,
    #[error("Second number is invalid")]
    InvalidSecondOperand,
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

impl ValidationError {
    /// The error kind a failed calculation reports for this check.
    pub fn kind(self) -> ErrorKind {
        match self {
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidFirstOperand | Self::InvalidOperator | Self::InvalidSecondOperand => {
                ErrorKind::InvalidInput
            }
        }
    }
}

impl From<ValidationError> for CalcError {
    fn from(err: ValidationError) -> Self {
        CalcError::new(err.kind(), err.to_string())
    }
}

/// `Ok(())` when the triple can be computed.
pub type ValidationResult = Result<(), ValidationError>;

/// A triple that passed validation, ready to evaluate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ValidatedInput {
    pub first: f64,
    pub operator: Operator,
    pub second: f64,
}

/// Check that `first operator second` can be computed.
///
/// Checks run in order (first operand, operator, second operand, zero
/// divisor) and stop at the first failure.
pub fn validate_calculation_input(first: &str, operator: &str, second: &str) -> ValidationResult {
    parse_input(first, operator, second).map(|_| ())
}

pub(crate) fn parse_input(
    first: &str,
    operator: &str,
    second: &str,
) -> Result<ValidatedInput, ValidationError> {
    let first = parse_operand(first).map_err(|err| {
        trace!(%err, "first operand rejected");
        ValidationError::InvalidFirstOperand
    })?;

    let operator: Operator = operator.parse().map_err(|err| {
        trace!(%err, "operator rejected");
        ValidationError::InvalidOperator
    })?;

    let second = parse_operand(second).map_err(|err| {
        trace!(%err, "second operand rejected");
        ValidationError::InvalidSecondOperand
    })?;

    if operator == Operator::Divide && second == 0.0 {
        return Err(ValidationError::DivisionByZero);
    }

    Ok(ValidatedInput {
        first,
        operator,
        second,
    })
}
