//! Catalog entry data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A UI component in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Stable slug, unique across the catalog, immutable once created
    pub component_id: String,

    /// Display name
    pub name: String,

    /// Short description shown in listings
    pub description: String,

    /// Per-framework code variants (a well-formed entry has at least one)
    pub frameworks: Vec<FrameworkImplementation>,

    /// Preview rendering hints
    pub preview: Preview,

    /// Top-level category slug (e.g. "button")
    pub category: String,

    /// Optional subcategory slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Free-form tags for search and filtering
    #[serde(default)]
    pub tags: Vec<String>,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// Usage counters, absent on freshly created entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Component {
    /// Find the implementation for a specific framework, if present.
    pub fn implementation(&self, language: Language) -> Option<&FrameworkImplementation> {
        self.frameworks.iter().find(|f| f.language == language)
    }

    /// Languages this component ships implementations for.
    pub fn languages(&self) -> Vec<Language> {
        self.frameworks.iter().map(|f| f.language).collect()
    }
}

/// One language-specific code variant of a component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkImplementation {
    /// Target framework
    pub language: Language,

    /// Opaque source-code snippet
    pub code: String,

    /// Package names this variant needs, in install order
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Free-text usage notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Preview rendering hints supplied by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Background class for the preview container
    pub background: String,

    /// Preview height (CSS value)
    pub height: String,

    /// Preview width (CSS value)
    pub width: String,

    /// Optional extra container class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_class: Option<String>,
}

/// Usage counters maintained server-side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub bookmark_count: u64,
    #[serde(default)]
    pub view_count: u64,
}

/// Frameworks the catalog serves code for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Nextjs,
    Vue,
    Astro,
    Svelte,
}

impl Language {
    /// Wire/query-parameter form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Nextjs => "nextjs",
            Language::Vue => "vue",
            Language::Astro => "astro",
            Language::Svelte => "svelte",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Language::Html),
            "nextjs" => Ok(Language::Nextjs),
            "vue" => Ok(Language::Vue),
            "astro" => Ok(Language::Astro),
            "svelte" => Ok(Language::Svelte),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Difficulty rating for a component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Wire/query-parameter form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
