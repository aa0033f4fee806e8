//! Display formatting for numeric results.
//!
//! Output is locale-free: no thousand separators, `.` as the decimal point.

/// Shown for any non-finite value.
pub const ERROR_DISPLAY: &str = "Error";

/// Magnitudes at or above this switch to scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e12;

/// Nonzero magnitudes below this switch to scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-6;

/// Mantissa digits after the point in scientific output.
const SCIENTIFIC_PRECISION: usize = 6;

/// Significant digits kept when normalising a result for plain display.
const DISPLAY_SIGNIFICANT_DIGITS: usize = 12;

/// Format a number for display.
///
/// - non-finite values become `"Error"`
/// - `|v| >= 1e12` and `0 < |v| < 1e-6` use scientific notation, e.g. `"1.000000e+12"`
/// - everything else is a plain decimal with no trailing zeros, e.g. `"5"`, `"0.3"`
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    // Pick the notation from the rounded value so a result that rounds up
    // to a threshold lands on the same side as the rounded number itself
    let rounded = round_to_display_precision(value);
    let magnitude = rounded.abs();
    if magnitude >= SCIENTIFIC_UPPER || (magnitude != 0.0 && magnitude < SCIENTIFIC_LOWER) {
        format_scientific(rounded)
    } else {
        format_plain(rounded)
    }
}

/// Round a finite value to the precision used for display.
///
/// Absorbs binary representation noise, so `0.1 + 0.2` becomes exactly `0.3`.
/// Non-finite values are returned unchanged.
pub fn round_to_display_precision(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    // `{:.Ne}` rounds to N+1 significant digits; parsing it back is exact
    // for what the formatter just produced.
    format!("{:.*e}", DISPLAY_SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

fn format_plain(rounded: f64) -> String {
    if rounded == 0.0 {
        // Covers negative zero
        return "0".to_string();
    }
    // f64's Display is the shortest round-trip form and never uses an exponent
    rounded.to_string()
}

fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.*e}", SCIENTIFIC_PRECISION, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{}e{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}e+{}", mantissa, exponent),
        None => formatted,
    }
}
