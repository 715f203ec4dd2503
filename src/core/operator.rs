//! Binary arithmetic operators and their pure combination rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::InputError;

/// One of the four arithmetic operations a key press can select.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// ASCII symbol shown in the pending-expression label.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Glyph printed on the keypad button.
    pub fn key_label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Combine two operands with native f64 arithmetic.
    ///
    /// Pure: no rounding, no guards. Division by zero yields an infinity
    /// or NaN per IEEE-754.
    ///
    /// ```rust
    /// use keycalc::core::Operator;
    ///
    /// assert_eq!(Operator::Subtract.combine(5.0, 3.0), 2.0);
    /// assert!(Operator::Divide.combine(7.0, 0.0).is_infinite());
    /// ```
    pub fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// Free-function form of [`Operator::combine`].
pub fn combine(a: f64, b: f64, op: Operator) -> f64 {
    op.combine(a, b)
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "x" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(InputError::UnknownOperator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_covers_each_operator() {
        assert_eq!(combine(5.0, 3.0, Operator::Add), 8.0);
        assert_eq!(combine(5.0, 3.0, Operator::Subtract), 2.0);
        assert_eq!(combine(5.0, 3.0, Operator::Multiply), 15.0);
        assert_eq!(combine(6.0, 3.0, Operator::Divide), 2.0);
    }

    #[test]
    fn divide_by_zero_follows_ieee() {
        assert_eq!(combine(7.0, 0.0, Operator::Divide), f64::INFINITY);
        assert_eq!(combine(-7.0, 0.0, Operator::Divide), f64::NEG_INFINITY);
        assert!(combine(0.0, 0.0, Operator::Divide).is_nan());
    }

    #[test]
    fn combine_does_not_round() {
        assert_eq!(combine(0.1, 0.2, Operator::Add), 0.1 + 0.2);
        assert_ne!(combine(0.1, 0.2, Operator::Add), 0.3);
    }

    #[test]
    fn parses_ascii_and_keypad_glyphs() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let err = "^".parse::<Operator>().unwrap_err();
        assert!(matches!(err, InputError::UnknownOperator(ref s) if s == "^"));
    }

    #[test]
    fn symbols_round_trip_through_parse() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
            assert_eq!(op.key_label().parse::<Operator>().unwrap(), op);
        }
    }
}
