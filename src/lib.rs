//! Arithmetic evaluation and display formatting for calculator front ends.
//!
//! The [`calculator`] module is the engine: pure functions that take operand
//! text and an operator symbol and return a [`calculator::CalcResult`].
//! [`config`] and [`report`] support the `calc` binary.

pub mod calculator;
pub mod config;
pub mod report;

pub use calculator::{
    CalcError, CalcResult, ErrorKind, ValidationError, ValidationResult, calculate_percentage,
    format_result, safe_calculation, toggle_sign, validate_calculation_input,
};
