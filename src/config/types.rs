use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub resume: ResumeConfig,
}

/// Connection settings for the portfolio backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g., "https://portfolio.example.com").
    /// Left unset, every submission resolves to a network failure.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Total request timeout in seconds (default: 15).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where downloaded resume documents are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// Target directory for `resume --download` (default: current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

fn default_timeout() -> u32 {
    15
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl BackendConfig {
    /// Base URL with surrounding whitespace and trailing slashes removed.
    ///
    /// Returns `None` for a missing or blank value.
    pub fn normalized_base_url(&self) -> Option<String> {
        let url = self.base_url.as_deref()?.trim().trim_end_matches('/');
        if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}
