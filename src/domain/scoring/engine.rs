//! Applies chosen options to session state.

use crate::domain::catalog::{AnswerOption, Catalog, Category, Question};
use crate::domain::foundation::ChoiceLetter;
use crate::domain::interview::InterviewState;

use super::WeightTable;

/// What applying one option changed on the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedEffect {
    /// Weighted points written to the category, when the option scored.
    pub weighted_points: Option<f64>,
    /// How many tags were new to the session's tag set.
    pub tags_added: usize,
    /// How many tier signals were recorded.
    pub signals_recorded: usize,
}

/// Stateless scorer: turns a chosen option into tag, signal, and score
/// mutations on the session state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringEngine {
    weights: WeightTable,
}

impl ScoringEngine {
    /// Creates an engine over an explicit weight table.
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    /// Creates an engine from a catalog's category weights.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(WeightTable::from_catalog(catalog))
    }

    /// Returns the weight table the engine scores with.
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Finds the option a letter selects on a question.
    ///
    /// `None` is the clarification condition, not an error: nothing has
    /// mutated and the caller re-asks.
    pub fn match_option(question: &Question, letter: ChoiceLetter) -> Option<&AnswerOption> {
        question.option_for(letter)
    }

    /// Applies one matched option to the state.
    ///
    /// Tags are unioned and signals recorded for every answer; weighted
    /// points are written only for screener answers that carry a score.
    /// Follow-up scores are legal in the catalog but inert.
    pub fn apply_option(
        &self,
        category: &Category,
        option: &AnswerOption,
        is_follow_up: bool,
        state: &mut InterviewState,
    ) -> AppliedEffect {
        let tags_added = state.add_tags(option.tags().iter().cloned());

        let mut signals_recorded = 0;
        for tier in option.signals() {
            state.record_signal(*tier);
            signals_recorded += 1;
        }

        let weighted_points = if is_follow_up {
            None
        } else {
            option.score().map(|points| {
                let weighted = self.weights.weight_for(category.name()) * f64::from(points);
                state.record_category_score(category.name(), weighted);
                weighted
            })
        };

        AppliedEffect {
            weighted_points,
            tags_added,
            signals_recorded,
        }
    }
}
