//! Property tests for parser totality and recommendation monotonicity.
//!
//! The interpreter has to take anything a respondent can type, and the tier
//! decision has to order sensibly in the score. Both are cheap to state as
//! properties and embarrassing to get wrong.

use std::collections::BTreeSet;

use proptest::prelude::*;

use trade_compass::domain::catalog::Catalog;
use trade_compass::domain::foundation::{ErrorCode, Percentage, SessionId, Tag, Tier};
use trade_compass::domain::interview::{AnswerInterpreter, InterviewEngine, MAX_FIELD_LENGTH};
use trade_compass::domain::recommendation::TierPolicy;
use trade_compass::domain::scoring::SignalCounts;

fn test_engine() -> InterviewEngine {
    let yaml = r#"
categories:
  - name: Lead Flow
    screener:
      prompt: Where does the work come from?
      options:
        - label: A. Steady pipeline
          score: 4
          signals: [elite]
        - label: B. It comes and goes
          score: 1
          signals: [lite]
    follow_up:
      trigger: [b]
      prompt: Do you ask for referrals?
      options:
        - label: A. Every job
        - label: B. Rarely
  - name: Team
    screener:
      prompt: Who does the work?
      options:
        - label: A. A crew runs it
          score: 4
        - label: B. Just me
          score: 2
    follow_up:
      trigger: any
      prompt: What would you hand off first?
"#;
    InterviewEngine::new(Catalog::from_yaml_str(yaml).unwrap())
}

fn sanitized(text: &str) -> bool {
    text.chars().all(|c| {
        c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '\'' | '_' | '.')
    })
}

proptest! {
    #[test]
    fn letter_extraction_is_total(input in ".*") {
        if let Some(letter) = AnswerInterpreter::extract_choice_letter(&input) {
            prop_assert!(('A'..='E').contains(&letter.as_char()));
        }
    }

    #[test]
    fn identity_parsing_is_total_and_sanitized(input in ".*") {
        let parts = AnswerInterpreter::parse_identity(&input);

        prop_assert!(parts.name.chars().count() <= MAX_FIELD_LENGTH);
        prop_assert!(parts.trade.chars().count() <= MAX_FIELD_LENGTH);
        prop_assert!(sanitized(&parts.name));
        prop_assert!(sanitized(&parts.trade));
        if let Some(stage) = &parts.business_stage {
            prop_assert!(!stage.is_empty());
            prop_assert!(sanitized(stage));
        }
    }

    #[test]
    fn tier_is_monotone_in_percentage(
        first in 0u8..=100,
        second in 0u8..=100,
        lite in 0u32..5,
        system in 0u32..5,
        elite in 0u32..5,
        with_survival_tag in proptest::bool::ANY,
    ) {
        let (low, high) = if first <= second { (first, second) } else { (second, first) };

        let mut signals = SignalCounts::new();
        for _ in 0..lite {
            signals.record(Tier::Lite);
        }
        for _ in 0..system {
            signals.record(Tier::System);
        }
        for _ in 0..elite {
            signals.record(Tier::Elite);
        }

        let mut tags = BTreeSet::new();
        if with_survival_tag {
            tags.insert(Tag::try_new("survival_mode").unwrap());
        }

        let policy = TierPolicy::default();
        let lower = policy.decide(Percentage::new(low), signals, &tags);
        let upper = policy.decide(Percentage::new(high), signals, &tags);

        prop_assert!(lower <= upper);
    }

    #[test]
    fn random_turns_never_break_session_invariants(
        inputs in proptest::collection::vec(
            prop_oneof![3 => "[A-Ea-e(). ]{0,12}", 1 => ".*"],
            1..25,
        )
    ) {
        let engine = test_engine();
        let mut state = engine.start_session(SessionId::new());
        let mut last_index = 0;

        for input in &inputs {
            match engine.process_turn(&mut state, input) {
                Ok(_) => {}
                Err(err) => prop_assert_eq!(err.code, ErrorCode::SessionComplete),
            }
            prop_assert!(state.current_index() >= last_index);
            prop_assert!(state.current_index() <= engine.catalog().len());
            last_index = state.current_index();
        }
    }
}
