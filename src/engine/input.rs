//! Key press tokens accepted by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::InputError;
use crate::core::Operator;

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::DigitOutOfRange(value))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InputError::InvalidDigit(ch))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percentage,
}

impl Input {
    /// Parse a whitespace-separated key sequence.
    ///
    /// Fails on the first unknown token; nothing is applied.
    ///
    /// ```rust
    /// use keycalc::engine::Input;
    ///
    /// let keys = Input::parse_sequence("1 2 + 3 =").unwrap();
    /// assert_eq!(keys.len(), 5);
    /// assert!(Input::parse_sequence("1 ? 2").is_err());
    /// ```
    pub fn parse_sequence(text: &str) -> Result<Vec<Input>, InputError> {
        text.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::ToggleSign => f.write_str("±"),
            Self::Percentage => f.write_str("%"),
        }
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if ch.is_ascii_digit() {
                return Digit::try_from(ch).map(Self::Digit);
            }
        }

        match s {
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "C" | "c" | "AC" | "ac" => Ok(Self::Clear),
            "±" | "+/-" | "neg" => Ok(Self::ToggleSign),
            "%" => Ok(Self::Percentage),
            other => other
                .parse::<Operator>()
                .map(Self::Operator)
                .map_err(|_| InputError::UnknownToken(other.to_string())),
        }
    }
}
