//! Keycalc: a pure functional calculator engine
//!
//! Keycalc turns a stream of calculator key presses into display state. It
//! follows a "pure core, imperative shell" layout: every key press is a pure
//! function from one [`core::Session`] to the next, and the
//! [`engine::Engine`] shell owns the current session for an interaction
//! loop.
//!
//! # Core Concepts
//!
//! - **Session**: the display text, accumulator, pending operator and entry
//!   flag, as one serializable value
//! - **Transitions**: `apply_digit`, `apply_operator`, `apply_equals`, ...
//! - **Readout**: the display line and pending-expression label a view draws
//! - **Validation**: invariant checks that report every violation at once
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{render, Operator, Session};
//! use keycalc::engine::{apply_digit, apply_equals, apply_operator, Digit};
//!
//! let five = Digit::try_from(5u8).unwrap();
//! let three = Digit::try_from(3u8).unwrap();
//!
//! let session = Session::new();
//! let session = apply_digit(&session, five);
//! let session = apply_operator(&session, Operator::Add);
//! assert_eq!(render(&session).pending_label, "5 +");
//!
//! let session = apply_digit(&session, three);
//! let session = apply_equals(&session);
//! assert_eq!(render(&session).display_text, "8");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod logging;
pub mod validation;

// Re-export commonly used types
pub use builder::{EngineBuilder, EngineConfig};
pub use core::{render, Operator, Readout, Session, State};
pub use engine::{apply, Engine, Input, InputError};
