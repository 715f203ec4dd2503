//! Errors raised while turning raw key text into inputs.

use thiserror::Error;

/// Errors that can occur when parsing key presses
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown key '{0}'")]
    UnknownToken(String),

    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),

    #[error("Digit value {0} out of range (expected 0-9)")]
    DigitOutOfRange(u8),

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),
}
