//! Settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Localization catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Directory holding the `.mui` locale files.
    pub directory: PathBuf,
    /// Emit diagnostic tracing events during load and lookup.
    pub diagnostics: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("MUI_CATALOG"))
            .build()?;

        settings.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                directory: PathBuf::from("locales"),
                diagnostics: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
