//! Configuration loading for the contact client.
//!
//! Settings live in a TOML file under the platform config directory.
//! A missing file yields defaults; the backend base URL may be supplied
//! later through the environment or the command line.

mod loader;
mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use types::{BackendConfig, Config, ResumeConfig};
