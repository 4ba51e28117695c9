// src/fetch.rs

//! Fetch-state machines binding UI state to catalog client calls.
//!
//! Each hook owns its own `idle -> loading -> {success | error}` state and
//! nothing else's. Re-fetch triggers are the caller's responsibility: a page
//! or language change means the owner calls `fetch`/`search` again.
//!
//! Every hook carries a monotonically increasing request-generation token.
//! A response is applied only while its token is still the latest issued, so
//! an older, slower response can never overwrite a newer one. `retire` marks
//! the hook as torn down; late resolutions are then dropped entirely.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::client::CatalogClient;
use crate::models::{Component, Filter, Language, Pagination};

/// Options for a listing hook.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Base filter merged under every fetch
    pub filter: Filter,
    /// Fetch once on mount (default true)
    pub auto_fetch: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            auto_fetch: true,
        }
    }
}

/// Snapshot of a listing hook's state.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub items: Vec<Component>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Option<Pagination>,
}

/// Listing hook: holds items, loading/error flags and server pagination.
pub struct ComponentList {
    client: Arc<CatalogClient>,
    base: Filter,
    last_filter: Mutex<Filter>,
    state: Mutex<ListState>,
    seq: AtomicU64,
    retired: AtomicBool,
}

impl ComponentList {
    /// Create a hook without fetching.
    pub fn new(client: Arc<CatalogClient>, base: Filter) -> Arc<Self> {
        Arc::new(Self {
            client,
            last_filter: Mutex::new(base.clone()),
            base,
            state: Mutex::new(ListState::default()),
            seq: AtomicU64::new(0),
            retired: AtomicBool::new(false),
        })
    }

    /// Create a hook and auto-fetch unless disabled.
    pub async fn mount(client: Arc<CatalogClient>, options: ListOptions) -> Arc<Self> {
        let hook = Self::new(client, options.filter);
        if options.auto_fetch {
            hook.fetch(Filter::default()).await;
        }
        hook
    }

    /// Merge `overrides` into the base filter and fetch.
    ///
    /// The merged filter is remembered for `refetch`.
    pub async fn fetch(&self, overrides: Filter) {
        let filter = self.base.merge(&overrides);
        *self.last_filter.lock().expect("filter mutex poisoned") = filter.clone();
        self.run(filter).await;
    }

    /// Re-issue the last-used filter.
    pub async fn refetch(&self) {
        let filter = self
            .last_filter
            .lock()
            .expect("filter mutex poisoned")
            .clone();
        self.run(filter).await;
    }

    /// Current state snapshot.
    pub fn state(&self) -> ListState {
        self.state.lock().expect("state mutex poisoned").clone()
    }

    /// Clear the error without touching items.
    pub fn clear_error(&self) {
        self.state.lock().expect("state mutex poisoned").error = None;
    }

    /// Mark the hook as torn down; any in-flight resolution is dropped.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
    }

    async fn run(&self, filter: Filter) {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.lock().expect("state mutex poisoned");
            state.loading = true;
            state.error = None;
        }

        let result = self.client.list_components(&filter).await;

        // Token re-check happens under the state lock: a newer call's
        // `loading=true` write takes the same lock, so a stale resolution
        // can never slip in between the check and the apply.
        let mut state = self.state.lock().expect("state mutex poisoned");
        if self.retired.load(Ordering::SeqCst) || self.seq.load(Ordering::SeqCst) != token {
            log::debug!("dropping stale listing response (token {token})");
            return;
        }

        match result {
            Ok(page) => {
                state.items = page.items;
                state.pagination = page.pagination;
            }
            Err(error) => {
                state.error = Some(error.to_string());
                state.items = Vec::new();
                state.pagination = None;
            }
        }
        state.loading = false;
    }
}

/// Options for a single-component hook.
#[derive(Debug, Clone)]
pub struct DetailOptions {
    /// Narrow to one framework implementation
    pub language: Option<Language>,
    /// Fetch once on mount (default true)
    pub auto_fetch: bool,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            language: None,
            auto_fetch: true,
        }
    }
}

/// Snapshot of a single-component hook's state.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub component: Option<Component>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Single-component hook.
pub struct ComponentDetail {
    client: Arc<CatalogClient>,
    component_id: String,
    language: Option<Language>,
    state: Mutex<DetailState>,
    seq: AtomicU64,
    retired: AtomicBool,
}

impl ComponentDetail {
    /// Create a hook without fetching.
    pub fn new(
        client: Arc<CatalogClient>,
        component_id: impl Into<String>,
        language: Option<Language>,
    ) -> Arc<Self> {
        Arc::new(Self {
            client,
            component_id: component_id.into(),
            language,
            state: Mutex::new(DetailState::default()),
            seq: AtomicU64::new(0),
            retired: AtomicBool::new(false),
        })
    }

    /// Create a hook and auto-fetch unless disabled.
    pub async fn mount(
        client: Arc<CatalogClient>,
        component_id: impl Into<String>,
        options: DetailOptions,
    ) -> Arc<Self> {
        let hook = Self::new(client, component_id, options.language);
        if options.auto_fetch {
            hook.fetch().await;
        }
        hook
    }

    /// Fetch the component.
    ///
    /// An empty id short-circuits to `None` without a network call.
    pub async fn fetch(&self) {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if self.component_id.is_empty() {
            let mut state = self.state.lock().expect("state mutex poisoned");
            state.component = None;
            return;
        }

        {
            let mut state = self.state.lock().expect("state mutex poisoned");
            state.loading = true;
            state.error = None;
        }

        let result = self
            .client
            .get_component(&self.component_id, self.language)
            .await;

        let mut state = self.state.lock().expect("state mutex poisoned");
        if self.retired.load(Ordering::SeqCst) || self.seq.load(Ordering::SeqCst) != token {
            log::debug!(
                "dropping stale response for component {} (token {token})",
                self.component_id
            );
            return;
        }

        match result {
            Ok(component) => state.component = Some(component),
            Err(error) => {
                state.error = Some(error.to_string());
                state.component = None;
            }
        }
        state.loading = false;
    }

    /// Current state snapshot.
    pub fn state(&self) -> DetailState {
        self.state.lock().expect("state mutex poisoned").clone()
    }

    /// Clear the error without touching the component.
    pub fn clear_error(&self) {
        self.state.lock().expect("state mutex poisoned").error = None;
    }

    /// Mark the hook as torn down; any in-flight resolution is dropped.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
    }
}

/// Snapshot of a search hook's state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub results: Vec<Component>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Search hook. Results are always live; the client never caches search.
pub struct ComponentSearch {
    client: Arc<CatalogClient>,
    base: Filter,
    state: Mutex<SearchState>,
    seq: AtomicU64,
    retired: AtomicBool,
}

impl ComponentSearch {
    /// Create a search hook with a base filter applied to every query.
    pub fn new(client: Arc<CatalogClient>, base: Filter) -> Arc<Self> {
        Arc::new(Self {
            client,
            base,
            state: Mutex::new(SearchState::default()),
            seq: AtomicU64::new(0),
            retired: AtomicBool::new(false),
        })
    }

    /// Run a search.
    ///
    /// An empty or whitespace query clears results immediately with no
    /// network call. Bumping the token here also drops any slower in-flight
    /// search that would otherwise repopulate the cleared results.
    pub async fn search(&self, query: &str) {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().is_empty() {
            let mut state = self.state.lock().expect("state mutex poisoned");
            state.results = Vec::new();
            return;
        }

        {
            let mut state = self.state.lock().expect("state mutex poisoned");
            state.loading = true;
            state.error = None;
        }

        let result = self.client.search_components(query, &self.base).await;

        let mut state = self.state.lock().expect("state mutex poisoned");
        if self.retired.load(Ordering::SeqCst) || self.seq.load(Ordering::SeqCst) != token {
            log::debug!("dropping stale search response (token {token})");
            return;
        }

        match result {
            Ok(results) => state.results = results,
            Err(error) => {
                state.error = Some(error.to_string());
                state.results = Vec::new();
            }
        }
        state.loading = false;
    }

    /// Clear results without a network call.
    pub fn clear_results(&self) {
        self.state.lock().expect("state mutex poisoned").results = Vec::new();
    }

    /// Current state snapshot.
    pub fn state(&self) -> SearchState {
        self.state.lock().expect("state mutex poisoned").clone()
    }

    /// Clear the error without touching results.
    pub fn clear_error(&self) {
        self.state.lock().expect("state mutex poisoned").error = None;
    }

    /// Mark the hook as torn down; any in-flight resolution is dropped.
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::ClientConfig;

    /// Client pointed at a closed port: any network call errors instead of
    /// hanging, so short-circuit paths are observable by the absence of an
    /// error in hook state.
    fn offline_client() -> Arc<CatalogClient> {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            ..ClientConfig::default()
        };
        Arc::new(CatalogClient::new(Arc::new(config)).expect("client should build"))
    }

    #[tokio::test]
    async fn empty_id_short_circuits_to_none() {
        let hook = ComponentDetail::new(offline_client(), "", None);
        hook.fetch().await;

        let state = hook.state();
        assert!(state.component.is_none());
        assert!(state.error.is_none(), "no network call, so no error");
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn empty_search_clears_results_without_network() {
        let hook = ComponentSearch::new(offline_client(), Filter::default());
        hook.search("   ").await;

        let state = hook.state();
        assert!(state.results.is_empty());
        assert!(state.error.is_none(), "no network call, so no error");
    }

    #[tokio::test]
    async fn list_failure_surfaces_message_and_clears_items() {
        let hook = ComponentList::new(offline_client(), Filter::default());
        hook.fetch(Filter::default()).await;

        let state = hook.state();
        assert!(state.items.is_empty());
        assert!(state.pagination.is_none());
        assert!(state.error.is_some());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn retired_hook_ignores_resolution() {
        let hook = ComponentList::new(offline_client(), Filter::default());
        hook.retire();
        hook.fetch(Filter::default()).await;

        // The call errored, but the retired hook never applied it.
        let state = hook.state();
        assert!(state.error.is_none());
        assert!(state.loading, "loading flag stays as set at call start");
    }

    #[tokio::test]
    async fn clear_error_only_clears_error() {
        let hook = ComponentList::new(offline_client(), Filter::default());
        hook.fetch(Filter::default()).await;
        assert!(hook.state().error.is_some());

        hook.clear_error();
        let state = hook.state();
        assert!(state.error.is_none());
        assert!(state.items.is_empty());
    }

    #[tokio::test]
    async fn mount_without_auto_fetch_stays_idle() {
        let options = ListOptions {
            auto_fetch: false,
            ..ListOptions::default()
        };
        let hook = ComponentList::mount(offline_client(), options).await;

        let state = hook.state();
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }
}
