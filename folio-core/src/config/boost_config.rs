use serde::{Deserialize, Serialize};

/// Skills boost configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    /// When disabled the boost passes the composite through unchanged
    /// and records a multiplier of 1.0.
    pub enabled: bool,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
