//! Binary arithmetic with classified failures.
//!
//! Runs validation, arithmetic and formatting behind a single
//! total entry point, [`safe_calculation`].

use serde::Serialize;
use tracing::debug;

use super::error::{CalcError, ErrorKind};
use super::format::{format_result, round_to_display_precision};
use super::validation::parse_input;

/// Outcome of a calculator operation.
///
/// `T` is the success payload: a number for arithmetic, operand text for
/// sign toggling.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CalcResult<T = f64> {
    /// The operation succeeded.
    Success {
        /// The computed value.
        value: T,
        /// The value formatted for display.
        display: String,
    },
    /// The operation failed.
    Error {
        /// What went wrong.
        kind: ErrorKind,
        /// Message to surface to the user.
        message: String,
    },
}

impl<T> CalcResult<T> {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Check if this is a failed result.
    pub fn has_error(&self) -> bool {
        !self.is_success()
    }

    /// Get the value (only for successful results).
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Error { .. } => None,
        }
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display, .. } => display,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the text a display panel shows: the result, or the short
    /// text for the error kind.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Success { display, .. } => display,
            Self::Error { kind, .. } => kind.display_text(),
        }
    }

    /// Get the error kind (only for failed results).
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }

    /// Get the full error message (only for failed results).
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message, .. } => Some(message),
        }
    }

    /// Convert into a `Result`, for callers that want `?`.
    pub fn into_result(self) -> Result<(T, String), CalcError> {
        match self {
            Self::Success { value, display } => Ok((value, display)),
            Self::Error { kind, message } => Err(CalcError { kind, message }),
        }
    }
}

impl<T> From<CalcError> for CalcResult<T> {
    fn from(err: CalcError) -> Self {
        Self::Error {
            kind: err.kind,
            message: err.message,
        }
    }
}

impl CalcResult {
    /// Build a numeric result from a raw arithmetic value.
    ///
    /// Non-finite values can only come from magnitude overflow once inputs
    /// are validated, so they are classified as [`ErrorKind::Overflow`].
    pub(crate) fn from_value(raw: f64) -> Self {
        if !raw.is_finite() {
            debug!(raw, "result is not finite");
            return CalcError::overflow().into();
        }

        let value = round_to_display_precision(raw);
        if !value.is_finite() {
            return CalcError::overflow().into();
        }

        Self::Success {
            display: format_result(value),
            value,
        }
    }
}

/// Evaluate `first operator second`.
///
/// Never panics: invalid operands or operators give
/// [`ErrorKind::InvalidInput`], a zero divisor gives
/// [`ErrorKind::DivisionByZero`], and a result outside the finite range
/// gives [`ErrorKind::Overflow`].
pub fn safe_calculation(first: &str, operator: &str, second: &str) -> CalcResult {
    let input = match parse_input(first, operator, second) {
        Ok(input) => input,
        Err(err) => {
            debug!(first, operator, second, %err, "calculation rejected");
            return CalcError::from(err).into();
        }
    };

    let raw = input.operator.apply(input.first, input.second);
    CalcResult::from_value(raw)
}
