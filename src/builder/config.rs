//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Options that change how the engine renders edge cases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Show `-0` after toggling the sign of zero instead of `0`.
    pub keep_negative_zero: bool,
}
