//! Error handling for mui-catalog
//!
//! This module defines the error taxonomy for catalog construction.
//! Lookup misses are not errors; they surface as `None` from the catalog
//! accessors.

use std::path::PathBuf;

use thiserror::Error;

use crate::properties::ParseError;

/// Errors raised while constructing a [`crate::LocalizationCatalog`].
///
/// Every variant is fatal to construction: a failing load never yields a
/// partially populated catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The directory is missing, is not a directory, or could not be listed.
    #[error("localization directory not found: {}", .path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory exists but contains no `.mui` files.
    #[error("no .mui localization files found in {}", .path.display())]
    NoLocalizationFiles { path: PathBuf },

    /// A matched file could not be read.
    #[error("failed to read localization file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched file contained content the properties parser rejects.
    #[error("malformed localization file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
