//! Interview phase lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a session sits in the interview lifecycle.
///
/// The phase is derived from the session state rather than stored, so it can
/// never drift from the underlying counters. Clarifications do not move the
/// phase; advancing within the screener sequence is the `Screener ->
/// Screener` self-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    /// Waiting for the identity line.
    Greeting,
    /// Waiting for the current category's screener answer.
    Screener,
    /// Waiting for the current category's triggered follow-up answer.
    FollowUp,
    /// Every category answered; only reset is possible.
    Complete,
}

impl InterviewPhase {
    /// Returns the phase's display label.
    pub fn display_name(&self) -> &'static str {
        match self {
            InterviewPhase::Greeting => "greeting",
            InterviewPhase::Screener => "screener",
            InterviewPhase::FollowUp => "follow-up",
            InterviewPhase::Complete => "complete",
        }
    }

    /// Returns true when the interview has finished.
    pub fn is_complete(&self) -> bool {
        matches!(self, InterviewPhase::Complete)
    }
}

impl fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl StateMachine for InterviewPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InterviewPhase::*;
        matches!(
            (self, target),
            (Greeting, Screener)
                | (Screener, Screener)
                | (Screener, FollowUp)
                | (Screener, Complete)
                | (FollowUp, Screener)
                | (FollowUp, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InterviewPhase::*;
        match self {
            Greeting => vec![Screener],
            Screener => vec![Screener, FollowUp, Complete],
            FollowUp => vec![Screener, Complete],
            Complete => vec![],
        }
    }
}
