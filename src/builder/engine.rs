//! Builder for constructing engines.

use crate::builder::config::EngineConfig;
use crate::builder::error::BuildError;
use crate::core::Session;
use crate::engine::Engine;
use crate::validation::validate_session;
use stillwater::validation::Validation;

/// Builder for constructing engines with a fluent API.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    initial: Option<Session>,
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing session instead of the initial state.
    /// The session is validated in `build()`.
    pub fn initial(mut self, session: Session) -> Self {
        self.initial = Some(session);
        self
    }

    /// Keep `-0` when toggling the sign of zero.
    pub fn keep_negative_zero(mut self, keep: bool) -> Self {
        self.config.keep_negative_zero = keep;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine.
    /// Returns an error listing every violation if the initial session is invalid.
    pub fn build(self) -> Result<Engine, BuildError> {
        let session = self.initial.unwrap_or_default();

        if let Validation::Failure(violations) = validate_session(&session) {
            return Err(BuildError::InvalidInitialSession(
                violations.iter().cloned().collect(),
            ));
        }

        Ok(Engine::from_parts(session, self.config))
    }
}
