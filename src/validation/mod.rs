//! Validation of session invariants.
//!
//! Sessions produced by the engine always hold, but sessions assembled by
//! hand or deserialized from elsewhere may not. The rules here check a
//! session using Stillwater's `Validation` type so that every violation is
//! reported in a single pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::Session;
//! use keycalc::validation::SessionRules;
//!
//! let rules = SessionRules::standard()
//!     .require_pred(|s| !s.waiting_for_new_value(), "must be mid-entry");
//!
//! assert!(rules.enforce(&Session::new()).is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_session, SessionCheck, SessionRules};
pub use violations::SessionViolation;
