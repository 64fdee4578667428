//! The final recommendation record.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{Percentage, Tag, Tier};
use crate::domain::scoring::SignalCounts;

/// The interview's verdict: tier, score breakdown, and offer matches.
///
/// Pure data with no prose; the narrative collaborator turns this into the
/// respondent-facing summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tier: Tier,
    pub percentage_score: Percentage,
    pub total_score: f64,
    pub max_possible_score: f64,
    pub category_scores: BTreeMap<String, f64>,
    pub tier_signals: SignalCounts,
    pub tags: BTreeSet<Tag>,
    pub qualifying_modules: Vec<String>,
    pub qualifying_services: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recommendation {
        Recommendation {
            tier: Tier::System,
            percentage_score: Percentage::new(64),
            total_score: 22.5,
            max_possible_score: 35.0,
            category_scores: [("Lead Flow".to_string(), 3.75)].into_iter().collect(),
            tier_signals: SignalCounts::new(),
            tags: [Tag::try_new("word_of_mouth").unwrap()].into_iter().collect(),
            qualifying_modules: vec!["Lead Engine Playbook".to_string()],
            qualifying_services: vec![],
        }
    }

    #[test]
    fn serializes_the_full_breakdown() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["tier"], "system");
        assert_eq!(json["percentage_score"], 64);
        assert_eq!(json["total_score"], 22.5);
        assert_eq!(json["category_scores"]["Lead Flow"], 3.75);
        assert_eq!(json["qualifying_modules"][0], "Lead Engine Playbook");
    }

    #[test]
    fn round_trips_through_json() {
        let original = sample();
        let json = serde_json::to_string(&original).unwrap();
        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
