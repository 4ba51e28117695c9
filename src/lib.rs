// src/lib.rs

//! Component Catalog Client Library

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pagination;
