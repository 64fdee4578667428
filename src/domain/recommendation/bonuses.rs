//! Tag bonuses applied on top of the weighted category total.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

use crate::domain::foundation::Tag;

/// Built-in bonuses for tags that mark already-working business systems.
static DEFAULT_BONUSES: Lazy<TagBonusTable> = Lazy::new(|| {
    let entries = [
        ("marketing_engine", 2.0),
        ("automated_followup", 1.5),
        ("knows_numbers", 1.0),
        ("systematized", 1.0),
        ("owner_off_tools", 1.0),
    ]
    .into_iter()
    .map(|(tag, points)| {
        let tag = Tag::try_new(tag)
            .unwrap_or_else(|err| panic!("Built-in bonus tag is invalid: {}", err));
        (tag, points)
    });

    TagBonusTable::new(entries)
});

/// Additive score bonuses keyed by tag.
///
/// Bonuses reward systems the respondent already runs; they are additive and
/// individually unbounded, so the percentage clamp is the only ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct TagBonusTable {
    bonuses: Vec<(Tag, f64)>,
}

impl TagBonusTable {
    /// Creates a table from tag/points pairs.
    pub fn new(entries: impl IntoIterator<Item = (Tag, f64)>) -> Self {
        Self {
            bonuses: entries.into_iter().collect(),
        }
    }

    /// Creates a table that awards nothing.
    pub fn empty() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    /// Sums the bonus points for every table tag the respondent carries.
    pub fn bonus_for(&self, tags: &BTreeSet<Tag>) -> f64 {
        self.bonuses
            .iter()
            .filter(|(tag, _)| tags.contains(tag))
            .map(|(_, points)| points)
            .sum()
    }
}

impl Default for TagBonusTable {
    fn default() -> Self {
        DEFAULT_BONUSES.clone()
    }
}
