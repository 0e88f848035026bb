//! Configuration loading for rs-xrpl.
//!
//! Supports loading configuration from TOML files with environment variable
//! overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use xrpl_model::ProtocolLimits;

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Protocol limits carried into validation.
    #[serde(default)]
    pub limits: ProtocolLimits,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (text or json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Environment variables take precedence over file configuration:
    /// - RS_XRPL_MAX_SIGNER_ENTRIES
    /// - RS_XRPL_LOG_LEVEL
    /// - RS_XRPL_LOG_FORMAT
    pub fn from_file_with_env(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RS_XRPL_MAX_SIGNER_ENTRIES") {
            if let Ok(max) = val.parse() {
                self.limits.max_signer_entries = max;
            }
        }
        if let Ok(val) = std::env::var("RS_XRPL_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("RS_XRPL_LOG_FORMAT") {
            self.logging.format = val;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.limits.max_signer_entries == 0 {
            anyhow::bail!("limits.max_signer_entries must be > 0");
        }
        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => anyhow::bail!("unknown logging.format: {}", other),
        }
        Ok(())
    }

    /// Generate a sample configuration file.
    pub fn sample_config() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
