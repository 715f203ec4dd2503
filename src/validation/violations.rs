//! Session invariant violations.

use thiserror::Error;

/// Ways a session can break the invariants the engine maintains
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionViolation {
    #[error("Display is empty")]
    EmptyDisplay,

    #[error("Display '{display}' has more than one decimal point")]
    MultipleDecimalPoints { display: String },

    #[error("Display '{display}' is not a number")]
    MalformedDisplay { display: String },

    #[error("Pending operator '{operator}' has no accumulator")]
    OperatorWithoutAccumulator { operator: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
