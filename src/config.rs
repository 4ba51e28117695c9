// src/config.rs

//! Configuration resolution.
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! `CATALOG_API_URL` environment variable, explicit CLI flag.

use std::path::Path;

use crate::models::ClientConfig;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// Resolve the effective client configuration.
///
/// A missing or unreadable config file falls back to defaults with a
/// warning; it never aborts.
pub fn resolve_config(path: Option<&Path>, api_url_flag: Option<&str>) -> ClientConfig {
    let mut config = match path {
        Some(path) => ClientConfig::load_or_default(path),
        None => ClientConfig::default(),
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            config.base_url = url;
        }
    }

    if let Some(url) = api_url_flag {
        config.base_url = url.to_string();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = resolve_config(Some(Path::new("/nonexistent/config.toml")), None);
        assert_eq!(config.base_url, ClientConfig::default().base_url);
    }

    #[test]
    fn flag_beats_file_and_default() {
        let config = resolve_config(None, Some("http://localhost:9999/api"));
        assert_eq!(config.base_url, "http://localhost:9999/api");
    }
}
