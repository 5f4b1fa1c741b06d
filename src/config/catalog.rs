//! Reference data configuration loading from config.toml
//!
//! The reference tables (languages, binding types, book categories and stationery
//! subcategories) are seeded from a TOML file on startup. Seeding is idempotent:
//! rows that already exist by name are left alone.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSeed {
    /// Languages books can be printed in
    #[serde(default)]
    pub languages: Vec<String>,
    /// Binding types such as "Hardcover"
    #[serde(default)]
    pub binding_types: Vec<String>,
    /// Book categories with their subcategories
    #[serde(default)]
    pub categories: Vec<CategorySeed>,
    /// Subcategories of the stationery catalog
    #[serde(default)]
    pub stationery_subcategories: Vec<String>,
}

/// A book category and the subcategories filed under it
#[derive(Debug, Deserialize, Clone)]
pub struct CategorySeed {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

/// Loads the reference data seed from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_catalog_seed<P: AsRef<Path>>(path: P) -> Result<CatalogSeed> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_catalog_seed(&contents)
}

/// Parses a reference data seed from TOML text.
pub fn parse_catalog_seed(contents: &str) -> Result<CatalogSeed> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Path of the seed file, from `CATALOG_CONFIG` or `./config.toml`.
#[must_use]
pub fn catalog_config_path() -> String {
    std::env::var("CATALOG_CONFIG").unwrap_or_else(|_| "config.toml".to_string())
}
