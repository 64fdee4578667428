//! Recommendation tier definitions.
//!
//! Represents the product tier levels the assessment can recommend.

use serde::{Deserialize, Serialize};

/// Recommended product tier.
///
/// Ordered from least to most comprehensive; ordering is used when
/// comparing tier outcomes, never for the decision itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Starter tier - foundations for businesses still finding their footing.
    Lite,

    /// Core tier - systems for established businesses ready to tighten up.
    System,

    /// Top tier - growth program for businesses already running on rails.
    Elite,
}

impl Tier {
    /// All tiers from least to most comprehensive.
    pub const ALL: [Tier; 3] = [Tier::Lite, Tier::System, Tier::Elite];

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Lite => "Lite",
            Tier::System => "System",
            Tier::Elite => "Elite",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    pub fn rank(&self) -> u8 {
        match self {
            Tier::Lite => 0,
            Tier::System => 1,
            Tier::Elite => 2,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
