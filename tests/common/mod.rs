//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use portfolio_contact::backend::HttpBackend;
use portfolio_contact::config::BackendConfig;
use portfolio_contact::form::ContactRequest;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL of a port nobody listens on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn backend_config(base_url: Option<&str>) -> BackendConfig {
    BackendConfig {
        base_url: base_url.map(str::to_string),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    }
}

pub fn http_backend(base_url: Option<&str>) -> HttpBackend {
    HttpBackend::new(&backend_config(base_url)).expect("Failed to build HTTP backend")
}

/// The request from the happy-path scenario.
pub fn ada_request() -> ContactRequest {
    ContactRequest::new("Ada", "ada@x.com", "Hi", "Hello")
}
