//! Ordered tier qualification rules.
//!
//! The tier decision is data, not branching: an ordered rule list evaluated
//! first-match-wins with `lite` as the unconditional floor. Hosts can swap
//! the list wholesale; the standard policy encodes the shipped thresholds.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

use crate::domain::foundation::{Percentage, Tag, Tier};
use crate::domain::scoring::SignalCounts;

/// Tags that rule out an elite recommendation outright.
static ELITE_DISQUALIFIERS: Lazy<Vec<Tag>> =
    Lazy::new(|| builtin_tags(&["survival_mode", "just_starting", "not_in_business"]));

/// Tags that rule out a system recommendation outright.
static SYSTEM_DISQUALIFIERS: Lazy<Vec<Tag>> = Lazy::new(|| builtin_tags(&["not_in_business"]));

fn builtin_tags(values: &[&str]) -> Vec<Tag> {
    values
        .iter()
        .map(|value| {
            Tag::try_new(*value)
                .unwrap_or_else(|err| panic!("Built-in rule tag is invalid: {}", err))
        })
        .collect()
}

/// Signal requirement: at least one `(tier, count)` entry must hold.
///
/// An empty gate always passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalGate {
    any_of: Vec<(Tier, u32)>,
}

impl SignalGate {
    /// Gate that passes when any listed tier has reached its count.
    pub fn any_of(requirements: Vec<(Tier, u32)>) -> Self {
        Self { any_of: requirements }
    }

    /// Gate that always passes.
    pub fn open() -> Self {
        Self { any_of: Vec::new() }
    }

    /// Returns true when the recorded signals satisfy the gate.
    pub fn passes(&self, signals: SignalCounts) -> bool {
        self.any_of.is_empty()
            || self
                .any_of
                .iter()
                .any(|(tier, min)| signals.count(*tier) >= *min)
    }
}

/// One candidate tier with its qualification conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRule {
    tier: Tier,
    min_percentage: u8,
    gate: SignalGate,
    disqualifying_tags: Vec<Tag>,
}

impl TierRule {
    /// Creates a rule for a tier.
    pub fn new(
        tier: Tier,
        min_percentage: u8,
        gate: SignalGate,
        disqualifying_tags: Vec<Tag>,
    ) -> Self {
        Self {
            tier,
            min_percentage,
            gate,
            disqualifying_tags,
        }
    }

    /// Returns the tier this rule grants.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Checks the percentage floor, the signal gate, and the disqualifiers.
    pub fn qualifies(
        &self,
        percentage: Percentage,
        signals: SignalCounts,
        tags: &BTreeSet<Tag>,
    ) -> bool {
        // 1. Percentage floor
        if percentage.value() < self.min_percentage {
            return false;
        }

        // 2. Signal gate
        if !self.gate.passes(signals) {
            return false;
        }

        // 3. Disqualifying tags
        !self.disqualifying_tags.iter().any(|tag| tags.contains(tag))
    }
}

/// Ordered first-match tier rules with a `lite` fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPolicy {
    rules: Vec<TierRule>,
}

impl TierPolicy {
    /// Standard elite percentage floor.
    pub const DEFAULT_ELITE_THRESHOLD: u8 = 80;

    /// Standard system percentage floor.
    pub const DEFAULT_SYSTEM_THRESHOLD: u8 = 50;

    /// Creates a policy from an ordered rule list.
    pub fn new(rules: Vec<TierRule>) -> Self {
        Self { rules }
    }

    /// Standard two-rule policy with the given percentage floors.
    ///
    /// Elite needs three elite signals and no hardship tag; system needs two
    /// system signals or one elite signal and an operating business.
    pub fn standard(elite_threshold: u8, system_threshold: u8) -> Self {
        Self::new(vec![
            TierRule::new(
                Tier::Elite,
                elite_threshold,
                SignalGate::any_of(vec![(Tier::Elite, 3)]),
                ELITE_DISQUALIFIERS.clone(),
            ),
            TierRule::new(
                Tier::System,
                system_threshold,
                SignalGate::any_of(vec![(Tier::System, 2), (Tier::Elite, 1)]),
                SYSTEM_DISQUALIFIERS.clone(),
            ),
        ])
    }

    /// Picks the first qualifying tier, falling back to `lite`.
    pub fn decide(
        &self,
        percentage: Percentage,
        signals: SignalCounts,
        tags: &BTreeSet<Tag>,
    ) -> Tier {
        self.rules
            .iter()
            .find(|rule| rule.qualifies(percentage, signals, tags))
            .map(TierRule::tier)
            .unwrap_or(Tier::Lite)
    }
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self::standard(
            Self::DEFAULT_ELITE_THRESHOLD,
            Self::DEFAULT_SYSTEM_THRESHOLD,
        )
    }
}
