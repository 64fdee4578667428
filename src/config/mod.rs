//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRADE_COMPASS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use trade_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.build_engine().expect("Failed to build engine");
//! ```

mod catalog;
mod engine;
mod error;

pub use catalog::CatalogSourceConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

use crate::domain::interview::InterviewEngine;

/// Root application configuration
///
/// Contains all configuration sections for the Trade Compass assessment.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tier threshold configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Question catalog source
    #[serde(default)]
    pub catalog: CatalogSourceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRADE_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// Every section has defaults, so an empty environment is valid.
    ///
    /// # Environment Variable Format
    ///
    /// - `TRADE_COMPASS__ENGINE__ELITE_THRESHOLD=85` -> `engine.elite_threshold = 85`
    /// - `TRADE_COMPASS__CATALOG__PATH=...` -> `catalog.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRADE_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Build the interview engine this configuration describes
    ///
    /// Resolves the catalog source and applies the configured tier
    /// thresholds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog cannot be loaded.
    pub fn build_engine(&self) -> Result<InterviewEngine, ConfigError> {
        let catalog = self.catalog.resolve()?;
        let engine =
            InterviewEngine::new(catalog).with_recommender(self.engine.recommendation_engine());
        Ok(engine)
    }
}
