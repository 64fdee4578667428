//! Tier decision and offer matching over a finished interview.

use crate::domain::catalog::AnswerOption;
use crate::domain::foundation::{Percentage, Tier};
use crate::domain::interview::InterviewState;
use crate::domain::scoring::WeightTable;

use super::{OfferCatalog, Recommendation, TagBonusTable, TierPolicy};

/// Computes the final recommendation from accumulated session state.
///
/// Evaluation is a pure function of the state and the tables: running it
/// twice over the same state yields the same record.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    policy: TierPolicy,
    bonuses: TagBonusTable,
    offers: OfferCatalog,
}

impl RecommendationEngine {
    /// Creates an engine from explicit tables.
    pub fn new(policy: TierPolicy, bonuses: TagBonusTable, offers: OfferCatalog) -> Self {
        Self {
            policy,
            bonuses,
            offers,
        }
    }

    /// Standard tables with custom tier percentage floors.
    pub fn with_thresholds(elite_threshold: u8, system_threshold: u8) -> Self {
        Self {
            policy: TierPolicy::standard(elite_threshold, system_threshold),
            bonuses: TagBonusTable::default(),
            offers: OfferCatalog::default(),
        }
    }

    /// Evaluates a session's accumulated state into a recommendation.
    ///
    /// Safe on empty or partially-scored sessions: with no scored categories
    /// the percentage is 0 and the tier falls back to `lite`.
    pub fn evaluate(&self, state: &InterviewState, weights: &WeightTable) -> Recommendation {
        // 1. Weighted category total plus tag bonuses
        let raw: f64 = state.category_scores().values().sum();
        let total = raw + self.bonuses.bonus_for(state.tags());

        // 2. Ceiling over the categories that actually scored
        let max_possible: f64 = state
            .category_scores()
            .keys()
            .map(|name| weights.weight_for(name) * f64::from(AnswerOption::MAX_SCORE))
            .sum();

        // 3. Clamped percentage; zero ceiling degrades to zero
        let percentage = Percentage::from_ratio(total, max_possible);

        // 4. First qualifying rule wins
        let tier = self.policy.decide(percentage, state.signals(), state.tags());
        tracing::debug!(
            session_id = %state.session_id(),
            percentage = percentage.value(),
            tier = %tier,
            "tier decided"
        );

        // 5. Elite sessions receive no supplementary offers
        let (qualifying_modules, qualifying_services) = if tier == Tier::Elite {
            (Vec::new(), Vec::new())
        } else {
            (
                self.offers.matching_modules(state.tags()),
                self.offers.matching_services(state.tags()),
            )
        };

        Recommendation {
            tier,
            percentage_score: percentage,
            total_score: total,
            max_possible_score: max_possible,
            category_scores: state.category_scores().clone(),
            tier_signals: state.signals(),
            tags: state.tags().clone(),
            qualifying_modules,
            qualifying_services,
        }
    }
}
