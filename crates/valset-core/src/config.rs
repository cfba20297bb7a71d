// crates/valset-core/src/config.rs
//
// Scenario configuration for the validator-set test harness.
// Loaded from a TOML file or populated with the default chain parameters.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ValsetError;
use crate::types::BlockNumber;

/// Chain timing parameters and harness settings for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HarnessConfig {
    /// Minimum number of blocks a scheduled change must lead its epoch by.
    #[serde(default)]
    pub min_offset: BlockNumber,

    /// Number of blocks per epoch.
    #[serde(default = "default_blocks_per_epoch")]
    pub blocks_per_epoch: BlockNumber,

    /// Number of epochs per period.
    #[serde(default = "default_epochs_per_period")]
    pub epochs_per_period: BlockNumber,

    /// Height the simulated chain starts at.
    #[serde(default)]
    pub initial_height: BlockNumber,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_blocks_per_epoch() -> BlockNumber {
    200
}

fn default_epochs_per_period() -> BlockNumber {
    48
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            min_offset: 0,
            blocks_per_epoch: default_blocks_per_epoch(),
            epochs_per_period: default_epochs_per_period(),
            initial_height: 0,
            log_level: default_log_level(),
        }
    }
}

impl HarnessConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns `ValsetError::Config` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ValsetError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ValsetError> {
        let config: HarnessConfig = toml::from_str(contents)?;
        Ok(config)
    }
}
