// src/client.rs

//! Catalog API client.
//!
//! The sole boundary between the data layer and the network: builds query
//! strings from filters, validates response envelopes, and reads through the
//! instance-owned TTL cache. All operations are read-only.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::cache::{CacheStats, ResponseCache, cache_key};
use crate::error::{AppError, Result};
use crate::models::{ApiEnvelope, ClientConfig, Component, Filter, Language, Page};

/// Client for the component catalog API.
///
/// Owns its HTTP connection pool and response cache, so tests can build
/// isolated instances against a mock server.
#[derive(Debug)]
pub struct CatalogClient {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
    cache: ResponseCache,
}

impl CatalogClient {
    /// Create a new client from the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AppError::Http)?;
        let cache = ResponseCache::new(Duration::from_secs(config.cache_ttl_secs));

        Ok(Self {
            config,
            http,
            cache,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List catalog components matching `filter`.
    ///
    /// Identical filters within the freshness window are served from cache
    /// without a network call. Successful envelopes are cached before the
    /// page is returned.
    pub async fn list_components(&self, filter: &Filter) -> Result<Page<Component>> {
        let key = cache_key("components", filter);
        if let Some(value) = self.cache.get(&key) {
            log::debug!("cache hit for components listing");
            return decode_page(value);
        }

        let value = self
            .fetch_envelope("components", filter.query_pairs(), None)
            .await?;
        self.cache.set(&key, value.clone());
        decode_page(value)
    }

    /// Fetch a single component by id, optionally narrowed to one framework.
    ///
    /// A 404 maps to [`AppError::NotFound`]; other non-2xx statuses map to
    /// [`AppError::Request`].
    pub async fn get_component(&self, id: &str, language: Option<Language>) -> Result<Component> {
        let path = format!("components/{id}");
        let filter = Filter {
            language,
            ..Filter::default()
        };

        let key = cache_key(&path, &filter);
        if let Some(value) = self.cache.get(&key) {
            log::debug!("cache hit for component {id}");
            return decode_component(value);
        }

        let value = self
            .fetch_envelope(&path, filter.query_pairs(), Some(id))
            .await?;
        self.cache.set(&key, value.clone());
        decode_component(value)
    }

    /// Search the catalog.
    ///
    /// Fails fast with [`AppError::Validation`] on an empty or whitespace
    /// query, before any network call. Results are never cached: relevance
    /// is query-sensitive and low-value to memoize.
    pub async fn search_components(&self, query: &str, filter: &Filter) -> Result<Vec<Component>> {
        if query.trim().is_empty() {
            return Err(AppError::validation("search query is required"));
        }

        let mut pairs = filter.query_pairs();
        pairs.push(("q".into(), query.to_string()));

        let value = self.fetch_envelope("components/search", pairs, None).await?;
        let envelope: ApiEnvelope<Vec<Component>> = decode_envelope(value)?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Warm the cache for a set of categories.
    ///
    /// Best-effort: runs a bounded-concurrency batch of listing calls and
    /// logs per-category failures without propagating them. Returns the
    /// number of categories warmed successfully.
    pub async fn prefetch(&self, categories: &[String]) -> usize {
        let concurrency = self.config.max_concurrent.max(1);
        let limit = self.config.prefetch_limit;
        let delay = Duration::from_millis(self.config.request_delay_ms);

        let mut warmed = 0;
        let mut batch = stream::iter(categories)
            .map(|category| async move {
                let filter = Filter {
                    category: Some(category.clone()),
                    limit: Some(limit),
                    ..Filter::default()
                };
                (category, self.list_components(&filter).await)
            })
            .buffer_unordered(concurrency);

        while let Some((category, result)) = batch.next().await {
            match result {
                Ok(page) => {
                    log::debug!("prefetched {} {category} components", page.items.len());
                    warmed += 1;
                }
                Err(error) => {
                    log::warn!("Failed to prefetch {category} components: {error}");
                }
            }

            if delay.as_millis() > 0 {
                tokio::time::sleep(delay).await;
            }
        }

        warmed
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Cache entry count and key list, for diagnostics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Issue a GET and validate the response envelope, returning it as raw
    /// JSON suitable for caching.
    ///
    /// `not_found_id` marks a single-component fetch, where a 404 becomes
    /// [`AppError::NotFound`] instead of a plain status error.
    async fn fetch_envelope(
        &self,
        path: &str,
        pairs: Vec<(String, String)>,
        not_found_id: Option<&str>,
    ) -> Result<serde_json::Value> {
        let url = self.endpoint_url(path, &pairs)?;
        log::debug!("GET {url}");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = not_found_id {
                return Err(AppError::not_found(id));
            }
        }
        if !status.is_success() {
            return Err(AppError::request(status.as_u16(), url.to_string()));
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| AppError::parse(format!("{url}: {e}")))?;

        let success = value
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .ok_or_else(|| AppError::parse(format!("{url}: envelope missing success flag")))?;
        if !success {
            let message = value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("request failed");
            return Err(AppError::api(message));
        }

        Ok(value)
    }

    /// Build the full request URL for an endpoint path and query pairs.
    fn endpoint_url(&self, path: &str, pairs: &[(String, String)]) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

/// Decode a cached or fresh listing envelope into a page.
fn decode_page(value: serde_json::Value) -> Result<Page<Component>> {
    let envelope: ApiEnvelope<Vec<Component>> = decode_envelope(value)?;
    Ok(Page {
        items: envelope.data.unwrap_or_default(),
        pagination: envelope.pagination,
    })
}

/// Decode a single-component envelope.
fn decode_component(value: serde_json::Value) -> Result<Component> {
    let envelope: ApiEnvelope<Component> = decode_envelope(value)?;
    envelope
        .data
        .ok_or_else(|| AppError::parse("envelope missing component data"))
}

fn decode_envelope<T: DeserializeOwned>(value: serde_json::Value) -> Result<ApiEnvelope<T>> {
    serde_json::from_value(value).map_err(AppError::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> CatalogClient {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        };
        CatalogClient::new(Arc::new(config)).expect("client should build")
    }

    #[test]
    fn endpoint_url_joins_base_and_query() {
        let client = test_client("http://localhost:4000/api/");
        let filter = Filter {
            category: Some("button".into()),
            page: Some(2),
            ..Filter::default()
        };

        let url = client
            .endpoint_url("components", &filter.query_pairs())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4000/api/components?category=button&page=2"
        );
    }

    #[test]
    fn endpoint_url_without_pairs_has_no_query() {
        let client = test_client("http://localhost:4000/api");
        let url = client.endpoint_url("components/primary-button", &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4000/api/components/primary-button"
        );
    }

    #[tokio::test]
    async fn empty_search_query_fails_without_network() {
        // Unroutable address: a network attempt would error differently.
        let client = test_client("http://192.0.2.1/api");

        for query in ["", "   ", "\t\n"] {
            let err = client
                .search_components(query, &Filter::new())
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "query {query:?}");
        }
    }

    #[test]
    fn decode_page_requires_valid_envelope() {
        let err = decode_page(serde_json::json!({"success": true, "data": "nope"})).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
