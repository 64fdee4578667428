//! Question catalog source configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;
use crate::domain::catalog::{default_catalog, Catalog, CatalogError};

/// Where the question catalog comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSourceConfig {
    /// Path to a YAML catalog file; the embedded default is used when absent
    #[serde(default)]
    pub path: Option<String>,
}

impl CatalogSourceConfig {
    /// Load the configured catalog
    ///
    /// Reads and validates the file at `path` when one is set, otherwise
    /// clones the embedded default catalog.
    pub fn resolve(&self) -> Result<Catalog, CatalogError> {
        match &self.path {
            Some(path) => Catalog::from_yaml_file(path),
            None => Ok(default_catalog().clone()),
        }
    }

    /// Validate the catalog source
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if !Path::new(path).exists() {
                return Err(ValidationError::CatalogFileMissing(path.clone()));
            }
        }
        Ok(())
    }
}
