//! Tier recommendation: rules, bonuses, offers, and the final record.

mod bonuses;
mod engine;
mod offers;
mod recommendation;
mod rules;

pub use bonuses::TagBonusTable;
pub use engine::RecommendationEngine;
pub use offers::{Offer, OfferCatalog};
pub use recommendation::Recommendation;
pub use rules::{SignalGate, TierPolicy, TierRule};
