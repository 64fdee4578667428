//! Weighted scoring and tier-signal accumulation.

mod engine;
mod signals;
mod weights;

pub use engine::{AppliedEffect, ScoringEngine};
pub use signals::SignalCounts;
pub use weights::WeightTable;
