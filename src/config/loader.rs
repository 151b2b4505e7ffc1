use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Smallest viewport that fits the bordered counter at any count: two
/// `[ x ]` triggers, two gaps, the 20 characters of `i64::MIN` and the
/// border columns.
pub const MIN_VIEWPORT_WIDTH: u16 = 5 + 2 + 20 + 2 + 5 + 2;
/// Border rows, the heading and the counter row.
pub const MIN_VIEWPORT_HEIGHT: u16 = 4;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/connect-harness/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("connect-harness").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is non-zero
    /// - The viewport fits the counter
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.viewport_width < MIN_VIEWPORT_WIDTH
            || self.ui.viewport_height < MIN_VIEWPORT_HEIGHT
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui viewport {}x{} is smaller than the minimum {}x{}",
                    self.ui.viewport_width,
                    self.ui.viewport_height,
                    MIN_VIEWPORT_WIDTH,
                    MIN_VIEWPORT_HEIGHT
                ),
            });
        }

        Ok(())
    }
}
