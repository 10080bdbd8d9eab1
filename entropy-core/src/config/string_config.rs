use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for `DecayString`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringConfig {
    /// Always use the in-process simulation, even when a shared store is available.
    pub force_simulation: bool,
}

impl Default for StringConfig {
    fn default() -> Self {
        Self {
            force_simulation: defaults::DEFAULT_FORCE_SIMULATION,
        }
    }
}
