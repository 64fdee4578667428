//! Assessment category: one screener, optional follow-up, narrative nuggets.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::ChoiceLetter;

use super::{FollowUp, Question};

/// One themed step of the interview.
///
/// Categories are asked in catalog order. The screener contributes the
/// category's weighted score; the follow-up, when triggered, only deepens
/// the tag and signal picture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    name: String,
    weight: f64,
    screener: Question,
    follow_up: Option<FollowUp>,
    nuggets: BTreeMap<ChoiceLetter, String>,
}

impl Category {
    /// Weight applied when the catalog does not specify one.
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    pub(crate) fn new(
        name: impl Into<String>,
        weight: f64,
        screener: Question,
        follow_up: Option<FollowUp>,
        nuggets: BTreeMap<ChoiceLetter, String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            screener,
            follow_up,
            nuggets,
        }
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scoring weight for this category.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the screener question.
    pub fn screener(&self) -> &Question {
        &self.screener
    }

    /// Returns the follow-up, if the category defines one.
    pub fn follow_up(&self) -> Option<&FollowUp> {
        self.follow_up.as_ref()
    }

    /// Returns the gold nugget for a screener letter, if one is authored.
    pub fn nugget_for(&self, letter: ChoiceLetter) -> Option<&str> {
        self.nuggets.get(&letter).map(String::as_str)
    }
}
