//! Localization catalog module
//!
//! This module handles loading `.mui` locale files from a directory and
//! serving key lookups with a single-fallback-locale semantic.

pub mod loader;

// Re-export the catalog type
pub use loader::LocalizationCatalog;
