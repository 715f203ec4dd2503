//! The calculator session record and its rendered readout.

use serde::{Deserialize, Serialize};

use super::number::{format_number, parse_display};
use super::operator::Operator;
use super::state::{Phase, State};

/// Display text of a fresh or cleared session.
pub const INITIAL_DISPLAY: &str = "0";

/// Complete state of one calculator session.
///
/// Sessions are immutable values: every transition in [`crate::engine`]
/// takes a session by reference and returns a new one.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Phase, Session};
///
/// let session = Session::new();
/// assert_eq!(session.display(), "0");
/// assert_eq!(session.phase(), Phase::Idle);
/// assert!(!session.waiting_for_new_value());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub(crate) display: String,
    #[serde(default, with = "accumulator_text")]
    pub(crate) accumulator: Option<f64>,
    pub(crate) operator: Option<Operator>,
    pub(crate) waiting_for_new_value: bool,
}

// Accumulators compare bitwise so a NaN accumulator still equals itself.
impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.display == other.display
            && self.accumulator.map(f64::to_bits) == other.accumulator.map(f64::to_bits)
            && self.operator == other.operator
            && self.waiting_for_new_value == other.waiting_for_new_value
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session in the initial state.
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            accumulator: None,
            operator: None,
            waiting_for_new_value: false,
        }
    }

    /// Assemble a session from raw parts.
    ///
    /// No invariant is checked here; run [`crate::validation::validate_session`]
    /// on sessions that did not come from the engine.
    pub fn from_parts(
        display: impl Into<String>,
        accumulator: Option<f64>,
        operator: Option<Operator>,
        waiting_for_new_value: bool,
    ) -> Self {
        Self {
            display: display.into(),
            accumulator,
            operator,
            waiting_for_new_value,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn waiting_for_new_value(&self) -> bool {
        self.waiting_for_new_value
    }

    /// Numeric value of the current display.
    pub fn input_value(&self) -> f64 {
        parse_display(&self.display)
    }

    /// Phase derived from the accumulator and pending operator.
    pub fn phase(&self) -> Phase {
        match (self.accumulator, self.operator) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::Stored,
            (Some(_), Some(_)) => Phase::Pending,
        }
    }

    /// Render the two strings a view shows.
    pub fn readout(&self) -> Readout {
        render(self)
    }
}

impl State for Session {
    fn name(&self) -> &str {
        match self.phase() {
            Phase::Idle => "Idle",
            Phase::Stored => "Stored",
            Phase::Pending => "Pending",
        }
    }

    /// A session is in error when its display shows a non-finite value.
    fn is_error(&self) -> bool {
        !self.input_value().is_finite()
    }
}

/// What a view needs to draw the calculator screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// Main display line.
    pub display_text: String,
    /// `"<accumulator> <operator>"` while an operation is pending, else empty.
    pub pending_label: String,
}

/// Render a session into its readout.
///
/// ```rust
/// use keycalc::core::{render, Operator, Session};
///
/// let session = Session::from_parts("3", Some(12.5), Some(Operator::Multiply), false);
/// let readout = render(&session);
/// assert_eq!(readout.display_text, "3");
/// assert_eq!(readout.pending_label, "12.5 *");
/// ```
pub fn render(session: &Session) -> Readout {
    let pending_label = match (session.accumulator, session.operator) {
        (Some(value), Some(op)) => format!("{} {}", format_number(value), op.symbol()),
        _ => String::new(),
    };
    Readout {
        display_text: session.display.clone(),
        pending_label,
    }
}

/// Accumulator stored as text so NaN, infinities and negative zero survive
/// formats such as JSON that have no literal for them.
mod accumulator_text {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| {
                text.parse::<f64>().map_err(|e| {
                    <D::Error as de::Error>::custom(format!("invalid accumulator '{text}': {e}"))
                })
            })
            .transpose()
    }
}
