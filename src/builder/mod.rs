//! Builder API for configuring and constructing engines.

pub mod config;
pub mod engine;
pub mod error;

pub use config::EngineConfig;
pub use engine::EngineBuilder;
pub use error::BuildError;
