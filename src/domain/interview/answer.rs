//! Answer log entries.
//!
//! Every processed turn that mutates the session appends one entry, so the
//! log doubles as the transcript handed to the narrator at the end.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChoiceLetter, Timestamp};

/// What kind of turn an answer log entry records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKind {
    /// The greeting turn's identity line.
    Identity,
    /// A screener answer. `letter` is `None` when free text was accepted in
    /// place of a choice.
    Screener {
        category: String,
        letter: Option<ChoiceLetter>,
    },
    /// A follow-up answer. `letter` is `None` for free-text follow-ups.
    FollowUp {
        category: String,
        letter: Option<ChoiceLetter>,
    },
}

/// One logged turn: what it answered, what was typed, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub kind: AnswerKind,
    pub raw_text: String,
    pub recorded_at: Timestamp,
}

impl RecordedAnswer {
    /// Logs the greeting turn's identity line.
    pub fn identity(raw_text: impl Into<String>) -> Self {
        Self {
            kind: AnswerKind::Identity,
            raw_text: raw_text.into(),
            recorded_at: Timestamp::now(),
        }
    }

    /// Logs a screener answer for a category.
    pub fn screener(
        category: impl Into<String>,
        letter: Option<ChoiceLetter>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            kind: AnswerKind::Screener {
                category: category.into(),
                letter,
            },
            raw_text: raw_text.into(),
            recorded_at: Timestamp::now(),
        }
    }

    /// Logs a follow-up answer for a category.
    pub fn follow_up(
        category: impl Into<String>,
        letter: Option<ChoiceLetter>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            kind: AnswerKind::FollowUp {
                category: category.into(),
                letter,
            },
            raw_text: raw_text.into(),
            recorded_at: Timestamp::now(),
        }
    }
}
