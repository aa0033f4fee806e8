//! Printable summary of a calculator result.

use std::fmt::Display;

use serde::Serialize;

use crate::calculator::{CalcResult, ErrorKind, ValidationResult};

/// A calculator result prepared for output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// The input as the user wrote it, e.g. `5 + 3`.
    pub expression: String,
    /// The result (or short error text) as a display panel shows it.
    pub display: String,
    /// The unformatted value. None if the result is an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// The full error message. None on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Report {
    /// Create a report from a CalcResult.
    pub fn from_calc_result<T: Display>(
        expression: impl Into<String>,
        result: CalcResult<T>,
    ) -> Self {
        let expression = expression.into();
        match result {
            CalcResult::Success { value, display } => Self {
                expression,
                display,
                raw_value: Some(value.to_string()),
                error_kind: None,
                error_message: None,
            },
            CalcResult::Error { kind, message } => Self {
                expression,
                display: kind.display_text().to_string(),
                raw_value: None,
                error_kind: Some(kind),
                error_message: Some(message),
            },
        }
    }

    /// Create a report from a validation check.
    pub fn from_validation(expression: impl Into<String>, result: ValidationResult) -> Self {
        let expression = expression.into();
        match result {
            Ok(()) => Self {
                expression,
                display: "valid".to_string(),
                raw_value: None,
                error_kind: None,
                error_message: None,
            },
            Err(err) => Self {
                expression,
                display: err.to_string(),
                raw_value: None,
                error_kind: Some(err.kind()),
                error_message: Some(err.to_string()),
            },
        }
    }

    /// Check if this report describes a failure.
    pub fn is_error(&self) -> bool {
        self.error_kind.is_some()
    }

    /// Render as a single line of text.
    ///
    /// Errors show the full message, since the short display text drops
    /// which operand was at fault.
    pub fn to_text(&self) -> String {
        match &self.error_message {
            Some(message) => format!("{} = {} ({})", self.expression, self.display, message),
            None => format!("{} = {}", self.expression, self.display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{safe_calculation, toggle_sign, validate_calculation_input};

    #[test]
    fn test_success_report() {
        let report = Report::from_calc_result("5 + 3", safe_calculation("5", "+", "3"));
        assert!(!report.is_error());
        assert_eq!(report.display, "8");
        assert_eq!(report.raw_value.as_deref(), Some("8"));
        assert_eq!(report.to_text(), "5 + 3 = 8");
    }

    #[test]
    fn test_large_value_keeps_raw_digits() {
        let report = Report::from_calc_result("1e6 * 1e6", safe_calculation("1e6", "*", "1e6"));
        assert_eq!(report.display, "1.000000e+12");
        assert_eq!(report.raw_value.as_deref(), Some("1000000000000"));
    }

    #[test]
    fn test_error_report() {
        let report = Report::from_calc_result("5 / 0", safe_calculation("5", "/", "0"));
        assert!(report.is_error());
        assert_eq!(report.display, "Cannot divide by zero");
        assert_eq!(report.raw_value, None);
        assert_eq!(report.error_kind, Some(ErrorKind::DivisionByZero));

        let report = Report::from_calc_result("x + 1", safe_calculation("x", "+", "1"));
        assert_eq!(report.to_text(), "x + 1 = Invalid operation (First number is invalid)");
    }

    #[test]
    fn test_text_payload() {
        let report = Report::from_calc_result("±5", toggle_sign("5"));
        assert_eq!(report.raw_value.as_deref(), Some("-5"));
    }

    #[test]
    fn test_validation_report() {
        let report = Report::from_validation("1 / 0", validate_calculation_input("1", "/", "0"));
        assert_eq!(report.error_kind, Some(ErrorKind::DivisionByZero));
        assert_eq!(report.display, "Cannot divide by zero");

        let report = Report::from_validation("1 + 1", validate_calculation_input("1", "+", "1"));
        assert!(!report.is_error());
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let report = Report::from_calc_result("5 + 3", safe_calculation("5", "+", "3"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["display"], "8");
        assert!(json.get("error_kind").is_none());
    }
}
