//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, StoreConfig, StringConfig};
use crate::errors::ConfigError;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ENTROPY_*`)
/// 2. Config file passed to [`EntropyConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntropyConfig {
    pub store: StoreConfig,
    pub string: StringConfig,
    pub observability: ObservabilityConfig,
}

impl EntropyConfig {
    /// Load configuration from an optional TOML file plus environment overrides,
    /// then validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "store.capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.store.ticks_per_second == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "store.ticks_per_second".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let range = self.store.corruption_range;
        if range.low > range.high {
            return Err(ConfigError::ValidationFailed {
                field: "store.corruption_range".to_string(),
                message: format!("low ({}) must not exceed high ({})", range.low, range.high),
            });
        }
        if self.store.lock_poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "store.lock_poll_interval_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", VALID_LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply `ENTROPY_*` environment variables. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut EntropyConfig) {
        if let Ok(val) = std::env::var("ENTROPY_STORE_CAPACITY") {
            if let Ok(v) = val.parse::<usize>() {
                config.store.capacity = v;
            }
        }
        if let Ok(val) = std::env::var("ENTROPY_TICKS_PER_SECOND") {
            if let Ok(v) = val.parse::<u64>() {
                config.store.ticks_per_second = v;
            }
        }
        if let Ok(val) = std::env::var("ENTROPY_FORCE_SIMULATION") {
            if let Ok(v) = val.parse::<bool>() {
                config.string.force_simulation = v;
            }
        }
        if let Ok(val) = std::env::var("ENTROPY_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}
