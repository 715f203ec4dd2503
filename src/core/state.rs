//! Core State trait and the named phases of a calculator session.
//!
//! A session never moves through an explicit enumerated state; its phase is
//! derived from which of the accumulator and pending operator are present.
//! The `State` trait gives those derived phases (and the session itself) a
//! uniform, pure inspection surface for logging and diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that describe a position in the calculator state machine.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States are copied into every returned session
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States are plain data records
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Phase, State};
///
/// assert_eq!(Phase::Pending.name(), "Pending");
/// assert!(!Phase::Idle.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Implicit phase of a session, derived from its accumulator and operator.
///
/// The calculator runs indefinitely, so no phase is final.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No accumulator stored.
    Idle,
    /// Accumulator stored without a pending operator.
    Stored,
    /// Accumulator and pending operator both present.
    Pending,
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Stored => "Stored",
            Self::Pending => "Pending",
        }
    }
}
