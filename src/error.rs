// src/error.rs

//! Unified error handling for the catalog data layer.

use std::fmt;

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP transport failure (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Non-2xx HTTP status
    #[error("HTTP {status}: {url}")]
    Request { status: u16, url: String },

    /// Envelope arrived with `success: false`
    #[error("API error: {0}")]
    Api(String),

    /// Response body was not a valid envelope
    #[error("Parse error: {0}")]
    Parse(String),

    /// 404 on a single-component fetch
    #[error("Component not found: {id}")]
    NotFound { id: String },

    /// Rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {url}")]
    Timeout { url: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create an API error from an envelope message.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Create a parse error.
    pub fn parse(message: impl fmt::Display) -> Self {
        Self::Parse(message.to_string())
    }

    /// Create a not-found error for a component id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a non-2xx status error.
    pub fn request(status: u16, url: impl Into<String>) -> Self {
        Self::Request {
            status,
            url: url.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: err
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "<unknown>".to_string()),
            }
        } else {
            Self::Http(err)
        }
    }
}
