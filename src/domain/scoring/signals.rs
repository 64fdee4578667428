//! Tier signal counters.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Tier;

/// Running count of tier signals recorded from chosen options.
///
/// Signals are hints, not scores: the recommendation rules read these
/// counters as gates alongside the percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    lite: u32,
    system: u32,
    elite: u32,
}

impl SignalCounts {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for the given tier.
    pub fn record(&mut self, tier: Tier) {
        match tier {
            Tier::Lite => self.lite += 1,
            Tier::System => self.system += 1,
            Tier::Elite => self.elite += 1,
        }
    }

    /// Returns the count recorded for the given tier.
    pub fn count(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Lite => self.lite,
            Tier::System => self.system,
            Tier::Elite => self.elite,
        }
    }

    /// Returns the total number of signals recorded.
    pub fn total(&self) -> u32 {
        self.lite + self.system + self.elite
    }
}
