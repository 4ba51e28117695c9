//! Catalog query descriptor.
//!
//! A `Filter` is built fresh from UI state for every fetch call and never
//! persisted. Its query-pair form is deterministic so that deeply-equal
//! filters produce identical cache keys no matter how they were assembled.

use serde::{Deserialize, Serialize};

use super::component::{Difficulty, Language};

/// Sort direction for catalog listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Narrows a catalog listing or search.
///
/// Every field is optional; unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter {
    /// Category slug
    pub category: Option<String>,

    /// Restrict to components with an implementation for this framework
    pub language: Option<Language>,

    /// Tag set, comma-joined on the wire
    pub tags: Option<Vec<String>>,

    /// Difficulty rating
    pub difficulty: Option<Difficulty>,

    /// 1-based page number
    pub page: Option<u32>,

    /// Page size
    pub limit: Option<u32>,

    /// Field to sort by (server-defined names)
    pub sort_by: Option<String>,

    /// Sort direction
    pub sort_order: Option<SortOrder>,

    /// Free-text search term
    pub search: Option<String>,
}

impl Filter {
    /// Filter matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `overrides` on top of this filter; set fields in `overrides` win.
    pub fn merge(&self, overrides: &Filter) -> Filter {
        Filter {
            category: overrides.category.clone().or_else(|| self.category.clone()),
            language: overrides.language.or(self.language),
            tags: overrides.tags.clone().or_else(|| self.tags.clone()),
            difficulty: overrides.difficulty.or(self.difficulty),
            page: overrides.page.or(self.page),
            limit: overrides.limit.or(self.limit),
            sort_by: overrides.sort_by.clone().or_else(|| self.sort_by.clone()),
            sort_order: overrides.sort_order.or(self.sort_order),
            search: overrides.search.clone().or_else(|| self.search.clone()),
        }
    }

    /// Query pairs for all defined fields, sorted by key.
    ///
    /// Array-valued fields are comma-joined. The sort makes the output
    /// canonical: two deeply-equal filters yield the same pair list
    /// regardless of how callers constructed them.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();

        if let Some(category) = &self.category {
            pairs.push(("category".into(), category.clone()));
        }
        if let Some(language) = self.language {
            pairs.push(("language".into(), language.as_str().into()));
        }
        if let Some(tags) = &self.tags {
            if !tags.is_empty() {
                pairs.push(("tags".into(), tags.join(",")));
            }
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty".into(), difficulty.as_str().into()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".into(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".into(), limit.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".into(), sort_by.clone()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder".into(), sort_order.as_str().into()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".into(), search.clone()));
        }

        pairs.sort();
        pairs
    }

    /// Canonical single-string form, used for cache-key derivation.
    pub fn canonical(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
