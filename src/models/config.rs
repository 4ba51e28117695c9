//! Client configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Catalog API base URL, e.g. `https://host/api`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Cache entry freshness window in seconds
    #[serde(default = "defaults::cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Page size used for category prefetching
    #[serde(default = "defaults::prefetch_limit")]
    pub prefetch_limit: u32,

    /// Maximum concurrent prefetch requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Delay between prefetch requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Categories warmed by `prefetch` when none are given explicitly
    #[serde(default = "defaults::prefetch_categories")]
    pub prefetch_categories: Vec<String>,
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::validation("base_url is empty"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AppError::validation("user_agent is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::validation("timeout_secs must be > 0"));
        }
        if self.cache_ttl_secs == 0 {
            return Err(AppError::validation("cache_ttl_secs must be > 0"));
        }
        if self.max_concurrent == 0 {
            return Err(AppError::validation("max_concurrent must be > 0"));
        }
        if self.prefetch_limit == 0 {
            return Err(AppError::validation("prefetch_limit must be > 0"));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            cache_ttl_secs: defaults::cache_ttl(),
            prefetch_limit: defaults::prefetch_limit(),
            max_concurrent: defaults::max_concurrent(),
            request_delay_ms: defaults::request_delay(),
            prefetch_categories: defaults::prefetch_categories(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "https://airflow-ob6u.onrender.com/api".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; catalog-client/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn cache_ttl() -> u64 {
        300
    }
    pub fn prefetch_limit() -> u32 {
        10
    }
    pub fn max_concurrent() -> usize {
        5
    }
    pub fn request_delay() -> u64 {
        100
    }
    pub fn prefetch_categories() -> Vec<String> {
        vec![
            "button".into(),
            "accordion".into(),
            "card".into(),
            "navbar".into(),
        ]
    }
}
