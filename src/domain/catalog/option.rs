//! Answer option value object for lettered question choices.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::foundation::{ChoiceLetter, Tag, Tier, ValidationError};

/// One selectable answer within a question.
///
/// The letter is derived from the label's leading `"A."`-`"E."` prefix and
/// must match the option's position, so a validated question always offers
/// contiguous letters starting at A.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOption {
    letter: ChoiceLetter,
    label: String,
    score: Option<u8>,
    tags: BTreeSet<Tag>,
    signals: BTreeSet<Tier>,
}

impl AnswerOption {
    /// Highest score an option may carry.
    pub const MAX_SCORE: u8 = 4;

    /// Creates an option at the given zero-based position, validating the
    /// label prefix, score range, and tag forms.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the label lacks a `"X."` prefix, the
    /// prefix letter does not match the position, the label text is empty,
    /// the score exceeds [`Self::MAX_SCORE`], or a tag normalizes to nothing.
    pub fn try_new(
        position: usize,
        label: impl Into<String>,
        score: Option<u8>,
        tags: Vec<String>,
        signals: Vec<Tier>,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        let expected = ChoiceLetter::try_from_index(position)?;
        let letter = Self::parse_label_letter(&label)?;

        if letter != expected {
            return Err(ValidationError::invalid_format(
                "label",
                format!(
                    "option at position {} must be lettered '{}', got '{}'",
                    position, expected, letter
                ),
            ));
        }

        if let Some(points) = score {
            if points > Self::MAX_SCORE {
                return Err(ValidationError::out_of_range(
                    "score",
                    0,
                    Self::MAX_SCORE as i32,
                    points as i32,
                ));
            }
        }

        let tags = tags
            .into_iter()
            .map(Tag::try_new)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            letter,
            label: label.trim().to_string(),
            score,
            tags,
            signals: signals.into_iter().collect(),
        })
    }

    /// Returns the letter identifying this option.
    pub fn letter(&self) -> ChoiceLetter {
        self.letter
    }

    /// Returns the full display label, including the letter prefix.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the points this option contributes, if any.
    pub fn score(&self) -> Option<u8> {
        self.score
    }

    /// Returns the tags this option applies to the respondent.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the tier signals this option records.
    pub fn signals(&self) -> &BTreeSet<Tier> {
        &self.signals
    }

    fn parse_label_letter(label: &str) -> Result<ChoiceLetter, ValidationError> {
        let trimmed = label.trim();
        let mut chars = trimmed.chars();

        let letter = chars
            .next()
            .and_then(ChoiceLetter::from_char)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "label",
                    format!("option label must start with a letter A-E: '{}'", trimmed),
                )
            })?;

        if chars.next() != Some('.') {
            return Err(ValidationError::invalid_format(
                "label",
                format!("option label must start with '{}.': '{}'", letter, trimmed),
            ));
        }

        if chars.as_str().trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }

        Ok(letter)
    }
}
