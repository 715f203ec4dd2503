//! Stateful driver that owns a session and applies key presses to it.

use tracing::{debug, warn};

use super::error::InputError;
use super::input::Input;
use super::transition::apply_with;
use crate::builder::EngineConfig;
use crate::core::{render, Readout, Session, State};

/// Calculator engine owned by an interaction loop.
///
/// The engine is the imperative shell around the pure transitions: it holds
/// the current session, swaps in the result of each key press, and logs
/// every transition.
///
/// # Example
///
/// ```rust
/// use keycalc::engine::Engine;
///
/// let mut engine = Engine::new();
/// engine.press_str("5 + 5 0 % =").unwrap();
/// assert_eq!(engine.readout().display_text, "5.5");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine {
    session: Session,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine in the initial state with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(session: Session, config: EngineConfig) -> Self {
        Self { session, config }
    }

    /// Current session (pure)
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Active configuration (pure)
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Render the current session (pure)
    pub fn readout(&self) -> Readout {
        render(&self.session)
    }

    /// Apply one key press and return the new session.
    pub fn press(&mut self, input: Input) -> &Session {
        let next = apply_with(&self.session, input, &self.config);

        debug!(
            input = %input,
            from = self.session.name(),
            to = next.name(),
            display = next.display(),
            "applied key"
        );
        if next.is_error() && !self.session.is_error() {
            warn!(input = %input, display = next.display(), "result is not a finite number");
        }

        self.session = next;
        &self.session
    }

    /// Apply a whitespace-separated key sequence.
    ///
    /// Every token is parsed before any is applied, so an unknown token
    /// leaves the session untouched.
    pub fn press_str(&mut self, keys: &str) -> Result<&Session, InputError> {
        let inputs = Input::parse_sequence(keys)?;
        for input in inputs {
            self.press(input);
        }
        Ok(&self.session)
    }

    /// Return to the initial state, keeping the configuration.
    pub fn reset(&mut self) {
        debug!(from = self.session.name(), "reset");
        self.session = Session::new();
    }
}
