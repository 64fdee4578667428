//! Turn outcomes returned to the caller after each processed turn.

use serde::{Deserialize, Serialize};

use crate::domain::recommendation::Recommendation;

use super::RespondentProfile;

/// What the interview engine produced for one turn.
///
/// Serialized with a `type` tag so hosts can route on the outcome kind
/// without inspecting payloads. Question payloads are pre-formatted prompt
/// text with one option label per line; nuggets are raw narrative material
/// for the summary collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// First response: the captured profile plus the opening screener.
    Greeting {
        profile: RespondentProfile,
        question: String,
    },
    /// The active question re-asked after uninterpretable input.
    Clarification { question: String },
    /// A triggered follow-up, with the nugget for the screener letter that
    /// fired it.
    #[serde(rename = "followup")]
    FollowUp {
        question: String,
        nugget: Option<String>,
    },
    /// The next category's screener, with the nugget for the answer that
    /// closed the previous category.
    Transition {
        question: String,
        nugget: Option<String>,
    },
    /// The completed interview's recommendation record.
    Summary { recommendation: Recommendation },
}

impl TurnOutcome {
    /// Returns the outcome's wire tag.
    pub fn kind(&self) -> &'static str {
        match self {
            TurnOutcome::Greeting { .. } => "greeting",
            TurnOutcome::Clarification { .. } => "clarification",
            TurnOutcome::FollowUp { .. } => "followup",
            TurnOutcome::Transition { .. } => "transition",
            TurnOutcome::Summary { .. } => "summary",
        }
    }

    /// Returns the question text carried by this outcome, if any.
    pub fn question(&self) -> Option<&str> {
        match self {
            TurnOutcome::Greeting { question, .. }
            | TurnOutcome::Clarification { question }
            | TurnOutcome::FollowUp { question, .. }
            | TurnOutcome::Transition { question, .. } => Some(question),
            TurnOutcome::Summary { .. } => None,
        }
    }
}
