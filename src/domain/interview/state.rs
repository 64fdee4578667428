//! Interview session state.
//!
//! One mutable instance per session. Every turn applies a complete,
//! synchronous mutation; nothing here blocks or performs I/O. The phase is
//! derived from the counters, never stored.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Tag, Tier, Timestamp};
use crate::domain::scoring::SignalCounts;

use super::{InterviewPhase, RecordedAnswer, RespondentProfile};

/// Accumulated progress of one interview session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewState {
    session_id: SessionId,
    category_count: usize,
    current_index: usize,
    awaiting_follow_up: bool,
    greeted: bool,
    profile: Option<RespondentProfile>,
    answers: Vec<RecordedAnswer>,
    tags: BTreeSet<Tag>,
    category_scores: BTreeMap<String, f64>,
    signals: SignalCounts,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl InterviewState {
    /// Creates a fresh session over a catalog of `category_count` categories.
    pub fn new(session_id: SessionId, category_count: usize) -> Self {
        Self {
            session_id,
            category_count,
            current_index: 0,
            awaiting_follow_up: false,
            greeted: false,
            profile: None,
            answers: Vec::new(),
            tags: BTreeSet::new(),
            category_scores: BTreeMap::new(),
            signals: SignalCounts::new(),
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    /// Zero-based index of the category currently being asked.
    ///
    /// Monotonically non-decreasing; equals `category_count` once complete.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn awaiting_follow_up(&self) -> bool {
        self.awaiting_follow_up
    }

    pub fn is_greeted(&self) -> bool {
        self.greeted
    }

    pub fn profile(&self) -> Option<&RespondentProfile> {
        self.profile.as_ref()
    }

    /// The turn log, in arrival order.
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Weighted screener points, keyed by category name.
    pub fn category_scores(&self) -> &BTreeMap<String, f64> {
        &self.category_scores
    }

    pub fn signals(&self) -> SignalCounts {
        self.signals
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    /// Returns true once every category has been answered.
    pub fn is_complete(&self) -> bool {
        self.greeted && self.current_index >= self.category_count
    }

    /// Derives the current lifecycle phase.
    pub fn phase(&self) -> InterviewPhase {
        if !self.greeted {
            InterviewPhase::Greeting
        } else if self.is_complete() {
            InterviewPhase::Complete
        } else if self.awaiting_follow_up {
            InterviewPhase::FollowUp
        } else {
            InterviewPhase::Screener
        }
    }

    /// Records the greeting turn: profile captured, identity line logged,
    /// session moves to the first screener.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the session was already greeted.
    pub fn record_greeting(
        &mut self,
        profile: RespondentProfile,
        raw_text: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.greeted {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Session is already past the greeting",
            )
            .with_detail("session_id", self.session_id.to_string()));
        }

        self.profile = Some(profile);
        self.greeted = true;
        self.answers.push(RecordedAnswer::identity(raw_text));
        Ok(())
    }

    /// Appends an answer to the turn log.
    pub fn log_answer(&mut self, answer: RecordedAnswer) {
        self.answers.push(answer);
    }

    /// Unions tags into the accumulated set, returning how many were new.
    ///
    /// Re-adding a present tag is a no-op, so accumulation is idempotent.
    pub fn add_tags<I>(&mut self, tags: I) -> usize
    where
        I: IntoIterator<Item = Tag>,
    {
        let mut added = 0;
        for tag in tags {
            if self.tags.insert(tag) {
                added += 1;
            }
        }
        added
    }

    /// Increments the signal counter for a tier.
    pub fn record_signal(&mut self, tier: Tier) {
        self.signals.record(tier);
    }

    /// Records a category's weighted screener points.
    ///
    /// The interview flow scores each category at most once; a repeat write
    /// overwrites rather than accumulates.
    pub fn record_category_score(&mut self, category: impl Into<String>, weighted_points: f64) {
        self.category_scores.insert(category.into(), weighted_points);
    }

    /// Marks the current category's follow-up as pending. The index does not
    /// move until the follow-up is answered.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the session is on a screener.
    pub fn expect_follow_up(&mut self) -> Result<(), DomainError> {
        if self.phase() != InterviewPhase::Screener {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot queue a follow-up during the {} phase", self.phase()),
            )
            .with_detail("session_id", self.session_id.to_string()));
        }

        self.awaiting_follow_up = true;
        Ok(())
    }

    /// Moves to the next category, clearing any pending follow-up and
    /// stamping completion when the last category is passed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` before the greeting and
    /// `SessionComplete` once the interview has finished.
    pub fn advance(&mut self) -> Result<(), DomainError> {
        if !self.greeted {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot advance before the greeting",
            ));
        }
        if self.is_complete() {
            return Err(DomainError::session_complete(self.session_id));
        }

        self.awaiting_follow_up = false;
        self.current_index += 1;
        if self.current_index >= self.category_count {
            self.completed_at = Some(Timestamp::now());
        }
        Ok(())
    }

    /// Replaces all progress with a fresh zero-valued state for the same
    /// session. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::new(self.session_id, self.category_count);
    }
}
