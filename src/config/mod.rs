//! Configuration management module
//!
//! This module handles loading of crate configuration from TOML files and
//! environment variables.

pub mod settings;

pub use settings::{CatalogConfig, LoggingConfig, Settings};
