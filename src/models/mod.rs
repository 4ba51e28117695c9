// src/models/mod.rs

//! Domain models for the catalog data layer.
//!
//! This module contains all data structures used throughout the crate,
//! organized by their primary purpose.

mod component;
mod config;
mod envelope;
mod filter;

// Re-export all public types
pub use component::{Component, Difficulty, FrameworkImplementation, Language, Preview, Usage};
pub use config::ClientConfig;
pub use envelope::{ApiEnvelope, Page, Pagination};
pub use filter::{Filter, SortOrder};
