use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `backend.base_url`.
pub const BASE_URL_ENV: &str = "PORTFOLIO_BACKEND_URL";

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
    /// Uses `~/.config/portfolio-contact/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("portfolio-contact").join("config.toml")
    }

    /// Loads configuration from the default config file, then applies
    /// the `PORTFOLIO_BACKEND_URL` override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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
        Ok(config)
    }

    /// Replaces the configured base URL when `url` carries a non-blank value.
    pub fn apply_base_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(base_url = %url, "Base URL overridden");
            self.backend.base_url = Some(url);
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both timeouts are non-zero
    /// - A configured base URL uses the http or https scheme
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "backend.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.backend.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "backend.connect_timeout_seconds must be greater than zero".to_string(),
            });
        }

        if let Some(url) = self.backend.normalized_base_url() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "backend.base_url '{}' must start with http:// or https://",
                        url
                    ),
                });
            }
        }

        Ok(())
    }
}
