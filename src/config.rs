//! Configuration management for Veil-Forge

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding persisted profile documents
    pub data_dir: String,

    /// Log level
    pub log_level: String,

    /// Fixed seed for the fingerprint generator (deterministic runs)
    pub fingerprint_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "./browser_profiles".to_string(),
            log_level: "info".to_string(),
            fingerprint_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(data_dir) = env::var("VEIL_DATA_DIR") {
            config.data_dir = data_dir;
        }

        if let Ok(seed) = env::var("VEIL_FINGERPRINT_SEED") {
            config.fingerprint_seed = Some(
                seed.parse()
                    .map_err(|_| Error::configuration("Invalid VEIL_FINGERPRINT_SEED"))?,
            );
        }

        if let Ok(log_level) = env::var("VEIL_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}
