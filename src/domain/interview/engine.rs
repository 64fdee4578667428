//! The interview turn processor.
//!
//! One entry point, `process_turn`: takes the session state and the raw
//! text of a turn, applies exactly one complete mutation, and returns the
//! outcome the host should render. All catalog data is read-only here.

use crate::domain::catalog::{Catalog, Category};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::recommendation::{Recommendation, RecommendationEngine};
use crate::domain::scoring::ScoringEngine;

use super::{
    AnswerInterpreter, InterviewState, RecordedAnswer, RespondentProfile, TurnOutcome,
};

/// Re-ask text used when the session state and catalog disagree.
const RECOVERY_PROMPT: &str = "Let's try that again. Could you repeat your last answer?";

/// Drives interview sessions over one catalog.
///
/// The engine is stateless across turns; everything mutable lives in the
/// per-session [`InterviewState`]. One engine instance serves any number of
/// sessions.
#[derive(Debug, Clone)]
pub struct InterviewEngine {
    catalog: Catalog,
    scoring: ScoringEngine,
    recommender: RecommendationEngine,
}

impl InterviewEngine {
    /// Creates an engine with default recommendation tables.
    pub fn new(catalog: Catalog) -> Self {
        let scoring = ScoringEngine::from_catalog(&catalog);
        Self {
            catalog,
            scoring,
            recommender: RecommendationEngine::default(),
        }
    }

    /// Replaces the recommendation tables, keeping the catalog.
    pub fn with_recommender(mut self, recommender: RecommendationEngine) -> Self {
        self.recommender = recommender;
        self
    }

    /// Returns the catalog this engine interviews from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Creates a fresh session state sized to the catalog.
    pub fn start_session(&self, session_id: SessionId) -> InterviewState {
        InterviewState::new(session_id, self.catalog.len())
    }

    /// Processes one turn of raw input against a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionComplete` when the interview has already finished;
    /// the state is untouched. All other malformed input resolves to a
    /// `Clarification` outcome rather than an error.
    pub fn process_turn(
        &self,
        state: &mut InterviewState,
        input: &str,
    ) -> Result<TurnOutcome, DomainError> {
        // 1. Completed sessions refuse further input
        if state.is_complete() {
            tracing::warn!(
                session_id = %state.session_id(),
                "Turn received for a completed session"
            );
            return Err(DomainError::session_complete(state.session_id()));
        }

        // 2. First turn captures identity and opens the interview
        if !state.is_greeted() {
            return self.greet(state, input);
        }

        // 3. Interpret the turn against the active question
        let Some(category) = self.catalog.category(state.current_index()) else {
            return Ok(self.desync_clarification(state));
        };

        if state.awaiting_follow_up() {
            self.answer_follow_up(state, category, input)
        } else {
            self.answer_screener(state, category, input)
        }
    }

    /// Recomputes the recommendation for a finished session.
    ///
    /// Evaluation is a pure function of the final state, so this returns
    /// the same record the closing `Summary` carried.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` while the session is still open.
    pub fn summarize(&self, state: &InterviewState) -> Result<Recommendation, DomainError> {
        if !state.is_complete() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Cannot summarize an unfinished session",
            )
            .with_detail("session_id", state.session_id().to_string())
            .with_detail("phase", state.phase().to_string()));
        }

        Ok(self.recommender.evaluate(state, self.scoring.weights()))
    }

    fn greet(&self, state: &mut InterviewState, input: &str) -> Result<TurnOutcome, DomainError> {
        let parts = AnswerInterpreter::parse_identity(input);
        let profile = RespondentProfile::new(parts.name, parts.trade, parts.business_stage);
        state.record_greeting(profile.clone(), input)?;
        tracing::debug!(
            session_id = %state.session_id(),
            name = profile.name(),
            trade = profile.trade(),
            "Session greeted"
        );

        let Some(first) = self.catalog.category(0) else {
            return Ok(self.desync_clarification(state));
        };

        Ok(TurnOutcome::Greeting {
            profile,
            question: first.screener().to_string(),
        })
    }

    fn answer_screener(
        &self,
        state: &mut InterviewState,
        category: &Category,
        input: &str,
    ) -> Result<TurnOutcome, DomainError> {
        let screener = category.screener();
        let matched = AnswerInterpreter::extract_choice_letter(input)
            .and_then(|letter| ScoringEngine::match_option(screener, letter));

        let Some(option) = matched else {
            // Substantial free text stands as an unscored answer; anything
            // shorter gets the question again.
            if AnswerInterpreter::is_substantial_free_text(input) {
                state.log_answer(RecordedAnswer::screener(category.name(), None, input));
                state.advance()?;
                return self.next_outcome(state, None);
            }
            return Ok(TurnOutcome::Clarification {
                question: screener.to_string(),
            });
        };

        let effect = self.scoring.apply_option(category, option, false, state);
        state.log_answer(RecordedAnswer::screener(
            category.name(),
            Some(option.letter()),
            input,
        ));
        tracing::debug!(
            session_id = %state.session_id(),
            category = category.name(),
            letter = %option.letter(),
            points = ?effect.weighted_points,
            "Screener answered"
        );

        let nugget = category.nugget_for(option.letter()).map(str::to_string);

        // A defined follow-up fires at most once, straight after the
        // screener answer that triggered it.
        if let Some(follow_up) = category.follow_up().filter(|f| f.triggers_on(option.letter())) {
            state.expect_follow_up()?;
            return Ok(TurnOutcome::FollowUp {
                question: follow_up.question().to_string(),
                nugget,
            });
        }

        state.advance()?;
        self.next_outcome(state, nugget)
    }

    fn answer_follow_up(
        &self,
        state: &mut InterviewState,
        category: &Category,
        input: &str,
    ) -> Result<TurnOutcome, DomainError> {
        let Some(follow_up) = category.follow_up() else {
            return Ok(self.desync_clarification(state));
        };
        let question = follow_up.question();

        // Free-text follow-ups accept anything
        if question.is_free_text() {
            state.log_answer(RecordedAnswer::follow_up(category.name(), None, input));
            state.advance()?;
            return self.next_outcome(state, None);
        }

        let matched = AnswerInterpreter::extract_choice_letter(input)
            .and_then(|letter| ScoringEngine::match_option(question, letter));
        let Some(option) = matched else {
            return Ok(TurnOutcome::Clarification {
                question: question.to_string(),
            });
        };

        let effect = self.scoring.apply_option(category, option, true, state);
        state.log_answer(RecordedAnswer::follow_up(
            category.name(),
            Some(option.letter()),
            input,
        ));
        tracing::debug!(
            session_id = %state.session_id(),
            category = category.name(),
            letter = %option.letter(),
            tags_added = effect.tags_added,
            "Follow-up answered"
        );

        state.advance()?;
        self.next_outcome(state, None)
    }

    /// Builds the outcome that follows an index advance: the summary once
    /// complete, otherwise the next category's screener.
    fn next_outcome(
        &self,
        state: &InterviewState,
        nugget: Option<String>,
    ) -> Result<TurnOutcome, DomainError> {
        if state.is_complete() {
            let recommendation = self.recommender.evaluate(state, self.scoring.weights());
            tracing::debug!(
                session_id = %state.session_id(),
                "Interview complete"
            );
            return Ok(TurnOutcome::Summary { recommendation });
        }

        let Some(next) = self.catalog.category(state.current_index()) else {
            return Ok(self.desync_clarification(state));
        };

        Ok(TurnOutcome::Transition {
            question: next.screener().to_string(),
            nugget,
        })
    }

    /// The state points at a category the catalog does not have. Log it for
    /// operators and keep the session alive.
    fn desync_clarification(&self, state: &InterviewState) -> TurnOutcome {
        tracing::error!(
            session_id = %state.session_id(),
            current_index = state.current_index(),
            catalog_len = self.catalog.len(),
            "Catalog lookup missed for an active session"
        );
        TurnOutcome::Clarification {
            question: RECOVERY_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Tier};
    use crate::domain::interview::InterviewPhase;

    /// Two categories: a weighted screener with a B/C-triggered follow-up,
    /// then a screener with a free-text follow-up on every letter.
    fn engine() -> InterviewEngine {
        let yaml = r#"
categories:
  - name: Lead Flow
    weight: 1.25
    screener:
      prompt: Where does the work come from?
      options:
        - label: A. Steady pipeline
          score: 4
          tags: [marketing_engine]
          signals: [elite]
        - label: B. Word of mouth
          score: 3
          tags: [word_of_mouth]
          signals: [system]
        - label: C. It comes and goes
          score: 1
          tags: [inconsistent_leads]
          signals: [lite]
    follow_up:
      trigger: [b, c]
      prompt: Do you ask for referrals?
      options:
        - label: A. Every job
          tags: [referral_habit]
          signals: [system]
        - label: B. Rarely
          tags: [one_and_done]
    nuggets:
      a: Steady pipelines put you ahead of most shops.
      b: Word of mouth is a great base to build on.
  - name: Team
    screener:
      prompt: Who does the work?
      options:
        - label: A. A crew runs it
          score: 4
          tags: [has_crew]
          signals: [elite]
        - label: B. Just me
          score: 2
          tags: [solo]
          signals: [system]
    follow_up:
      trigger: any
      prompt: What would you hand off first?
"#;
        InterviewEngine::new(Catalog::from_yaml_str(yaml).unwrap())
    }

    fn greeted(engine: &InterviewEngine) -> InterviewState {
        let mut state = engine.start_session(SessionId::new());
        engine.process_turn(&mut state, "Wes, handyman").unwrap();
        state
    }

    mod greeting {
        use super::*;

        #[test]
        fn first_turn_captures_identity_and_asks_the_opening_screener() {
            let engine = engine();
            let mut state = engine.start_session(SessionId::new());

            let outcome = engine.process_turn(&mut state, "Wes, handyman").unwrap();

            match outcome {
                TurnOutcome::Greeting { profile, question } => {
                    assert_eq!(profile.name(), "Wes");
                    assert_eq!(profile.trade(), "handyman");
                    assert!(question.starts_with("Where does the work come from?"));
                    assert!(question.contains("\nA. Steady pipeline"));
                }
                other => panic!("Expected greeting, got {:?}", other),
            }
            assert_eq!(state.phase(), InterviewPhase::Screener);
            assert_eq!(state.answers().len(), 1);
        }

        #[test]
        fn greeting_never_scores() {
            let engine = engine();
            let state = greeted(&engine);
            assert!(state.category_scores().is_empty());
            assert!(state.tags().is_empty());
        }
    }

    mod screeners {
        use super::*;

        #[test]
        fn letter_answer_scores_and_moves_on() {
            let engine = engine();
            let mut state = greeted(&engine);

            let outcome = engine.process_turn(&mut state, "A").unwrap();

            match outcome {
                TurnOutcome::Transition { question, nugget } => {
                    assert!(question.starts_with("Who does the work?"));
                    assert_eq!(
                        nugget.as_deref(),
                        Some("Steady pipelines put you ahead of most shops.")
                    );
                }
                other => panic!("Expected transition, got {:?}", other),
            }
            assert_eq!(state.current_index(), 1);
            assert_eq!(state.category_scores().get("Lead Flow"), Some(&5.0));
            assert_eq!(state.signals().count(Tier::Elite), 1);
        }

        #[test]
        fn unmatched_short_input_clarifies_without_mutation() {
            let engine = engine();
            let mut state = greeted(&engine);

            let outcome = engine.process_turn(&mut state, "umm").unwrap();

            match outcome {
                TurnOutcome::Clarification { question } => {
                    assert!(question.starts_with("Where does the work come from?"));
                }
                other => panic!("Expected clarification, got {:?}", other),
            }
            assert_eq!(state.current_index(), 0);
            assert!(state.category_scores().is_empty());
            assert_eq!(state.answers().len(), 1);
        }

        #[test]
        fn clarification_is_retryable_indefinitely() {
            let engine = engine();
            let mut state = greeted(&engine);

            for _ in 0..3 {
                let outcome = engine.process_turn(&mut state, "??").unwrap();
                assert_eq!(outcome.kind(), "clarification");
            }
            let outcome = engine.process_turn(&mut state, "a").unwrap();
            assert_eq!(outcome.kind(), "transition");
        }

        #[test]
        fn offered_letter_off_the_list_clarifies() {
            let engine = engine();
            let mut state = greeted(&engine);

            // The Lead Flow screener stops at C.
            let outcome = engine.process_turn(&mut state, "E").unwrap();
            assert_eq!(outcome.kind(), "clarification");
            assert!(state.category_scores().is_empty());
        }

        #[test]
        fn substantial_free_text_is_accepted_unscored() {
            let engine = engine();
            let mut state = greeted(&engine);

            let outcome = engine
                .process_turn(&mut state, "mostly repeat customers calling me back honestly")
                .unwrap();

            assert_eq!(outcome.kind(), "transition");
            assert_eq!(state.current_index(), 1);
            assert!(state.category_scores().is_empty());
            // Free text never fires the follow-up.
            assert!(!state.awaiting_follow_up());
        }

        #[test]
        fn category_without_nuggets_carries_none() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "a").unwrap();

            // Team defines no nuggets, so its follow-up carries none.
            let outcome = engine.process_turn(&mut state, "b").unwrap();
            match outcome {
                TurnOutcome::FollowUp { nugget, .. } => assert!(nugget.is_none()),
                other => panic!("Expected follow-up, got {:?}", other),
            }
        }
    }

    mod follow_ups {
        use super::*;

        #[test]
        fn trigger_letter_emits_the_follow_up_and_holds_the_index() {
            let engine = engine();
            let mut state = greeted(&engine);

            let outcome = engine.process_turn(&mut state, "B").unwrap();

            match outcome {
                TurnOutcome::FollowUp { question, nugget } => {
                    assert!(question.starts_with("Do you ask for referrals?"));
                    assert_eq!(
                        nugget.as_deref(),
                        Some("Word of mouth is a great base to build on.")
                    );
                }
                other => panic!("Expected follow-up, got {:?}", other),
            }
            assert!(state.awaiting_follow_up());
            assert_eq!(state.current_index(), 0);
            assert_eq!(state.phase(), InterviewPhase::FollowUp);
        }

        #[test]
        fn non_trigger_letter_skips_the_follow_up() {
            let engine = engine();
            let mut state = greeted(&engine);

            let outcome = engine.process_turn(&mut state, "A").unwrap();

            assert_eq!(outcome.kind(), "transition");
            assert!(!state.awaiting_follow_up());
            assert_eq!(state.current_index(), 1);
        }

        #[test]
        fn follow_up_answer_advances_and_collects_tags_only() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "B").unwrap();

            let outcome = engine.process_turn(&mut state, "A").unwrap();

            assert_eq!(outcome.kind(), "transition");
            assert!(!state.awaiting_follow_up());
            assert_eq!(state.current_index(), 1);
            // Screener score only; the follow-up added its tag and signal.
            assert_eq!(state.category_scores().get("Lead Flow"), Some(&3.75));
            assert!(state
                .tags()
                .iter()
                .any(|t| t.as_str() == "referral_habit"));
            assert_eq!(state.signals().count(Tier::System), 2);
        }

        #[test]
        fn unmatched_follow_up_input_clarifies_with_the_follow_up() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "C").unwrap();

            let outcome = engine.process_turn(&mut state, "nope").unwrap();

            match outcome {
                TurnOutcome::Clarification { question } => {
                    assert!(question.starts_with("Do you ask for referrals?"));
                }
                other => panic!("Expected clarification, got {:?}", other),
            }
            assert!(state.awaiting_follow_up());
        }

        #[test]
        fn free_text_follow_up_accepts_anything() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "A").unwrap();
            engine.process_turn(&mut state, "A").unwrap();

            // Team's follow-up has no options; one word is enough.
            let outcome = engine.process_turn(&mut state, "invoicing").unwrap();

            assert_eq!(outcome.kind(), "summary");
            assert!(state.is_complete());
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn final_answer_emits_the_summary() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "A").unwrap();
            engine.process_turn(&mut state, "B").unwrap();

            let outcome = engine.process_turn(&mut state, "paperwork, all of it").unwrap();

            match outcome {
                TurnOutcome::Summary { recommendation } => {
                    // Raw 1.25*4 + 1.0*2 = 7.0, plus the marketing_engine
                    // bonus of 2.0, against a 9.0 ceiling.
                    assert_eq!(recommendation.total_score, 9.0);
                    assert_eq!(recommendation.max_possible_score, 9.0);
                }
                other => panic!("Expected summary, got {:?}", other),
            }
            assert!(state.is_complete());
            assert!(state.completed_at().is_some());
        }

        #[test]
        fn input_after_completion_is_refused() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "A").unwrap();
            engine.process_turn(&mut state, "A").unwrap();
            engine.process_turn(&mut state, "the books").unwrap();

            let result = engine.process_turn(&mut state, "A");

            let err = result.unwrap_err();
            assert_eq!(err.code, ErrorCode::SessionComplete);
            assert_eq!(state.answers().len(), 4);
        }

        #[test]
        fn summarize_refuses_an_open_session() {
            let engine = engine();
            let state = greeted(&engine);

            let err = engine.summarize(&state).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        }

        #[test]
        fn summarize_matches_the_closing_summary() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "A").unwrap();
            engine.process_turn(&mut state, "B").unwrap();
            let outcome = engine.process_turn(&mut state, "paperwork, all of it").unwrap();

            let recomputed = engine.summarize(&state).unwrap();
            match outcome {
                TurnOutcome::Summary { recommendation } => {
                    assert_eq!(recommendation, recomputed);
                }
                other => panic!("Expected summary, got {:?}", other),
            }
        }

        #[test]
        fn reset_reopens_a_completed_session() {
            let engine = engine();
            let mut state = greeted(&engine);
            engine.process_turn(&mut state, "A").unwrap();
            engine.process_turn(&mut state, "A").unwrap();
            engine.process_turn(&mut state, "scheduling").unwrap();
            assert!(state.is_complete());

            state.reset();
            let outcome = engine.process_turn(&mut state, "Dana, electrician").unwrap();
            assert_eq!(outcome.kind(), "greeting");
        }
    }
}
