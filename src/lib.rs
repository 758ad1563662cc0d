//! mui-catalog
//!
//! Loads per-locale `.mui` translation files (flat properties-style
//! key/value text) from a directory and serves lookups with a
//! single-fallback-locale semantic. The catalog is populated once at
//! construction time and is read-only afterward; there is no reload,
//! no message formatting and no locale negotiation.

pub mod catalog;
pub mod config;
pub mod properties;
pub mod utils;

// Re-export commonly used types
pub use catalog::LocalizationCatalog;
pub use config::{CatalogConfig, LoggingConfig, Settings};
pub use utils::errors::{CatalogError, Result};
pub use utils::logging::init_logging;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
