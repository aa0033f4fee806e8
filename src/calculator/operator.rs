//! The four binary operators.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A supported binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// How a pending operator combines with a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorCategory {
    /// `+` and `-`: the percentage is an amount of the base.
    Additive,
    /// `*` and `/`: the percentage is a raw fraction.
    Multiplicative,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unsupported operator '{0}'")]
pub struct UnknownOperator(pub String);

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The canonical symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// How this operator treats a percentage typed after it.
    pub fn category(self) -> OperatorCategory {
        match self {
            Self::Add | Self::Subtract => OperatorCategory::Additive,
            Self::Multiply | Self::Divide => OperatorCategory::Multiplicative,
        }
    }

    /// Apply the operator with IEEE-754 double semantics.
    ///
    /// No zero-divisor check happens here; callers validate first.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Keypads render multiply and divide with their typographic glyphs
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Check whether `symbol` names one of the four supported operators.
pub fn is_valid_operator(symbol: &str) -> bool {
    symbol.parse::<Operator>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        assert_eq!("+".parse(), Ok(Operator::Add));
        assert_eq!("-".parse(), Ok(Operator::Subtract));
        assert_eq!("*".parse(), Ok(Operator::Multiply));
        assert_eq!("/".parse(), Ok(Operator::Divide));
        assert_eq!("×".parse(), Ok(Operator::Multiply));
        assert_eq!("÷".parse(), Ok(Operator::Divide));
    }

    #[test]
    fn test_unknown_symbols_rejected() {
        for symbol in ["", "%", "^", "x", "add", "++", "="] {
            assert!(!is_valid_operator(symbol), "{symbol:?} should be rejected");
        }
    }

    #[test]
    fn test_symbol_round_trips() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse(), Ok(op));
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(Operator::Add.category(), OperatorCategory::Additive);
        assert_eq!(Operator::Subtract.category(), OperatorCategory::Additive);
        assert_eq!(Operator::Multiply.category(), OperatorCategory::Multiplicative);
        assert_eq!(Operator::Divide.category(), OperatorCategory::Multiplicative);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Subtract.apply(10.0, 4.0), 6.0);
        assert_eq!(Operator::Multiply.apply(7.0, 6.0), 42.0);
        assert_eq!(Operator::Divide.apply(15.0, 3.0), 5.0);
        assert!(Operator::Multiply.apply(f64::MAX, 2.0).is_infinite());
    }
}
