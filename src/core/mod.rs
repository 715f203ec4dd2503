//! Core calculator types and logic.
//!
//! This module contains the pure data of the calculator:
//! - The `State` trait and derived `Phase`
//! - Arithmetic `Operator`s and their combination rule
//! - Display text conversions
//! - The `Session` record and its `Readout`
//!
//! Nothing here performs I/O or logging.

mod number;
mod operator;
mod session;
mod state;

pub use number::{format_number, is_decimal_literal, parse_display};
pub use operator::{combine, Operator};
pub use session::{render, Readout, Session, INITIAL_DISPLAY};
pub use state::{Phase, State};
