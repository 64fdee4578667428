//! Tier threshold configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::recommendation::{RecommendationEngine, TierPolicy};

/// Recommendation engine configuration
///
/// The thresholds are the minimum percentage scores for the elite and
/// system tiers. Signal gates and disqualifier tags come from the built-in
/// tier policy and are not configurable here.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Minimum percentage for the elite tier
    #[serde(default = "default_elite_threshold")]
    pub elite_threshold: u8,

    /// Minimum percentage for the system tier
    #[serde(default = "default_system_threshold")]
    pub system_threshold: u8,
}

impl EngineConfig {
    /// Build the recommendation engine these thresholds describe
    pub fn recommendation_engine(&self) -> RecommendationEngine {
        RecommendationEngine::with_thresholds(self.elite_threshold, self.system_threshold)
    }

    /// Validate threshold configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.elite_threshold > 100 || self.system_threshold > 100 {
            return Err(ValidationError::ThresholdOutOfRange);
        }
        if self.elite_threshold <= self.system_threshold {
            return Err(ValidationError::ThresholdsInverted);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            elite_threshold: default_elite_threshold(),
            system_threshold: default_system_threshold(),
        }
    }
}

fn default_elite_threshold() -> u8 {
    TierPolicy::DEFAULT_ELITE_THRESHOLD
}

fn default_system_threshold() -> u8 {
    TierPolicy::DEFAULT_SYSTEM_THRESHOLD
}
