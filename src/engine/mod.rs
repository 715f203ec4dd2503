//! Key-press transitions and the engine that drives them.
//!
//! # Key Concepts
//!
//! - **Inputs**: `Input` tokens parsed from keypad labels
//! - **Transitions**: pure `apply_*` functions from one `Session` to the next
//! - **Engine**: owns a session for an interaction loop and logs each step

mod error;
mod input;
mod machine;
mod transition;

pub use error::InputError;
pub use input::{Digit, Input};
pub use machine::Engine;
pub use transition::{
    apply, apply_clear, apply_decimal, apply_digit, apply_equals, apply_operator,
    apply_percentage, apply_toggle_sign, apply_with,
};
