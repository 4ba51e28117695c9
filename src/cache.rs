// src/cache.rs

//! In-memory TTL cache for catalog API responses.
//!
//! Keys are derived from the endpoint plus the canonical filter form, so
//! deeply-equal filters hit the same entry regardless of construction order.
//! Expired entries are judged stale lazily on read; they are only removed by
//! being overwritten or by an explicit `clear`.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

use crate::models::Filter;

/// A cached envelope and the instant it was captured.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    captured_at: Instant,
}

/// Entry count and key list, for diagnostics only.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub size: usize,
    pub keys: Vec<String>,
}

/// Keyed, time-bounded memoization of prior API responses.
///
/// Owned by a `CatalogClient` instance; the mutex is held only for map
/// access, never across an await point.
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

/// Derive the cache key for an endpoint + filter pair.
pub fn cache_key(endpoint: &str, filter: &Filter) -> String {
    let mut hasher = Sha256::new();
    hasher.update(endpoint.as_bytes());
    hasher.update(b"?");
    hasher.update(filter.canonical().as_bytes());
    hex::encode(hasher.finalize())
}

impl ResponseCache {
    /// Create a cache with the given freshness window.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Look up a fresh entry. An expired entry behaves as a miss but stays
    /// in the map until superseded or cleared.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries
            .get(key)
            .filter(|entry| entry.captured_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Store a response, unconditionally overwriting any prior entry.
    pub fn set(&self, key: &str, value: serde_json::Value) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                captured_at: Instant::now(),
            },
        );
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.lock().expect("cache mutex poisoned").clear();
    }

    /// Current entry count and key list.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        CacheStats {
            size: entries.len(),
            keys: entries.keys().cloned().collect(),
        }
    }
}
