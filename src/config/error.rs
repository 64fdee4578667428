//! Configuration error types

use thiserror::Error;

use crate::domain::catalog::CatalogError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Catalog loading failed: {0}")]
    CatalogFailed(#[from] CatalogError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Tier threshold exceeds 100 percent")]
    ThresholdOutOfRange,

    #[error("Elite threshold must be above the system threshold")]
    ThresholdsInverted,

    #[error("Catalog file does not exist: {0}")]
    CatalogFileMissing(String),
}
