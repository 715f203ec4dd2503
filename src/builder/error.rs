//! Build errors for the engine builder.

use crate::validation::SessionViolation;
use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial session is invalid: {}", describe(.0))]
    InvalidInitialSession(Vec<SessionViolation>),
}

fn describe(violations: &[SessionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
