//! Locale file loader and catalog lookups
//!
//! The catalog loads every `<locale>.mui` file from a flat directory at
//! construction time and answers lookups from the in-memory tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, error, warn};

use crate::config::CatalogConfig;
use crate::properties;
use crate::utils::errors::{CatalogError, Result};

/// File extension recognized as a locale file.
const MUI_EXTENSION: &str = ".mui";

/// In-memory set of translation tables keyed by locale identifier.
///
/// A locale identifier is the file's base name with the `.mui` suffix
/// stripped, exactly as the filesystem reports it; no normalization is
/// applied. The locale order follows directory enumeration order, which is
/// filesystem-dependent and not guaranteed sorted.
///
/// Construction either loads every matching file or fails; there is no
/// partially populated state and no reload. After construction nothing
/// mutates the tables, so a catalog behind a shared reference is safe for
/// concurrent readers.
#[derive(Debug, Clone)]
pub struct LocalizationCatalog {
    /// Translation tables by locale identifier
    tables: HashMap<String, HashMap<String, String>>,
    /// Locale identifiers in directory enumeration order
    locales: Vec<String>,
    /// Emit diagnostic tracing events during lookups
    diagnostics: bool,
}

impl LocalizationCatalog {
    /// Load every `.mui` file from `directory`, with diagnostics disabled.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self> {
        Self::load(directory.as_ref(), false)
    }

    /// Load a catalog as described by a [`CatalogConfig`].
    pub fn from_settings(settings: &CatalogConfig) -> Result<Self> {
        Self::load(&settings.directory, settings.diagnostics)
    }

    fn load(directory: &Path, diagnostics: bool) -> Result<Self> {
        if diagnostics {
            debug!(directory = %directory.display(), "loading localization files");
        }

        let entries = fs::read_dir(directory).map_err(|source| CatalogError::DirectoryNotFound {
            path: directory.to_path_buf(),
            source,
        })?;

        let mut catalog = Self {
            tables: HashMap::new(),
            locales: Vec::new(),
            diagnostics,
        };

        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::Io {
                path: directory.to_path_buf(),
                source,
            })?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let Some(locale) = name.strip_suffix(MUI_EXTENSION) else {
                continue;
            };
            if diagnostics {
                debug!(locale, "locale found");
            }

            let path = entry.path();
            let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            let table = properties::parse(&content).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

            catalog.insert_table(locale.to_string(), table);
            if diagnostics {
                debug!(locale, "locale added");
            }
        }

        if catalog.locales.is_empty() {
            if diagnostics {
                error!(directory = %directory.display(), "no .mui files found");
            }
            return Err(CatalogError::NoLocalizationFiles {
                path: directory.to_path_buf(),
            });
        }

        Ok(catalog)
    }

    /// Insert a table, collapsing duplicate locale identifiers.
    ///
    /// Two directory entries can derive the same identifier (for example
    /// names differing only in case on a case-insensitive filesystem); the
    /// last table wins and the ordered locale list keeps a single entry.
    fn insert_table(&mut self, locale: String, table: HashMap<String, String>) {
        if self.tables.insert(locale.clone(), table).is_none() {
            self.locales.push(locale);
        }
    }

    /// Locale identifiers collected at load time, in enumeration order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Look up `key` in the table for `locale`.
    ///
    /// Returns `None` when the locale or the key is absent; a miss is an
    /// ordinary outcome for callers to branch on, never an error.
    pub fn get(&self, key: &str, locale: &str) -> Option<&str> {
        let Some(table) = self.tables.get(locale) else {
            if self.diagnostics {
                warn!(locale, "locale not found");
            }
            return None;
        };

        let value = table.get(key);
        if value.is_none() && self.diagnostics {
            warn!(key, locale, "key not found for locale");
        }
        value.map(String::as_str)
    }

    /// Look up `key` in `locale`, falling back to `fallback_locale` on a miss.
    ///
    /// Exactly two lookups, primary then fallback, first hit wins; the
    /// fallback result may itself be absent. Tables are never merged.
    pub fn get_or_default(&self, key: &str, locale: &str, fallback_locale: &str) -> Option<&str> {
        self.get(key, locale)
            .or_else(|| self.get(key, fallback_locale))
    }

    /// Enable or disable diagnostic tracing events for this catalog.
    ///
    /// Affects observability only, never lookup results. With no tracing
    /// subscriber installed the events are no-ops.
    pub fn set_diagnostics(&mut self, enabled: bool) {
        self.diagnostics = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn duplicate_locale_collapses_to_last_table() {
        let mut catalog = LocalizationCatalog {
            tables: HashMap::new(),
            locales: Vec::new(),
            diagnostics: false,
        };

        catalog.insert_table("en".to_string(), table(&[("greeting", "Hello")]));
        catalog.insert_table("fr".to_string(), table(&[("greeting", "Bonjour")]));
        catalog.insert_table("en".to_string(), table(&[("greeting", "Hiya")]));

        assert_eq!(catalog.locales(), ["en", "fr"]);
        assert_eq!(catalog.get("greeting", "en"), Some("Hiya"));
        assert_eq!(catalog.get("greeting", "fr"), Some("Bonjour"));
    }

    #[test]
    fn get_or_default_prefers_primary_locale() {
        let mut catalog = LocalizationCatalog {
            tables: HashMap::new(),
            locales: Vec::new(),
            diagnostics: false,
        };
        catalog.insert_table("en".to_string(), table(&[("greeting", "Hello")]));
        catalog.insert_table(
            "es".to_string(),
            table(&[("greeting", "Hola"), ("farewell", "Adiós")]),
        );

        assert_eq!(catalog.get_or_default("greeting", "es", "en"), Some("Hola"));
        assert_eq!(catalog.get_or_default("farewell", "en", "es"), Some("Adiós"));
        assert_eq!(catalog.get_or_default("farewell", "de", "fr"), None);
    }
}
