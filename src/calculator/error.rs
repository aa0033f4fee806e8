//! Failure taxonomy shared by every calculator operation.

use serde::Serialize;
use thiserror::Error;

/// Category of a failed calculation.
///
/// Exactly one kind is attached to any failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// An operand did not parse or the operator is not supported.
    InvalidInput,
    /// The divisor parsed to zero.
    DivisionByZero,
    /// The result is outside the finite floating-point range.
    Overflow,
    /// Anything not otherwise classified.
    Unknown,
}

impl ErrorKind {
    /// Short text a display panel shows in place of a failed result.
    pub fn display_text(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid operation",
            Self::DivisionByZero => "Cannot divide by zero",
            Self::Overflow => "Number too large",
            Self::Unknown => "Error",
        }
    }
}

/// A classified failure: the kind plus a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CalcError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CalcError {
    /// Create an error of any kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an [`ErrorKind::InvalidInput`] error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Create an [`ErrorKind::Overflow`] error with the standard message.
    pub fn overflow() -> Self {
        Self::new(ErrorKind::Overflow, ErrorKind::Overflow.display_text())
    }
}
