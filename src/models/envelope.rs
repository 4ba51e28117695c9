//! API response envelope.
//!
//! Every catalog endpoint wraps its payload in `{success, data, ...}`.

use serde::{Deserialize, Serialize};

/// Wrapper around every catalog API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the request succeeded server-side
    pub success: bool,

    /// Payload, absent on failure responses
    #[serde(default)]
    pub data: Option<T>,

    /// Listing pagination, supplied by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Server-computed pagination metadata.
///
/// Taken verbatim from the envelope; the client does not recompute it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page, 1-based
    pub current: u32,

    /// Total number of pages
    pub pages: u32,

    /// Total number of matching items
    pub total: u64,

    /// Page size used for this listing
    pub limit: u32,

    pub has_next: bool,
    pub has_prev: bool,
}

/// A listing page returned by the client: items plus server pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}
