//! Free-text answer interpretation.
//!
//! Turns whatever the respondent typed into structured data: a leading
//! choice letter, an identity split, or a judgement that the text is
//! substantial enough to stand as an answer on its own. Every function here
//! is total; malformed input degrades to `None` or an empty field, never a
//! panic.

use crate::domain::foundation::ChoiceLetter;

/// Characters skipped in front of a candidate choice letter.
const LEADING_NOISE: [char; 9] = ['(', '[', '{', '"', '\'', '*', '-', '>', '.'];

/// Fewest whitespace-separated words for free text to stand as a screener
/// answer.
pub const MIN_FREE_TEXT_WORDS: usize = 5;

/// Longest a sanitized identity field may grow, in characters.
pub const MAX_FIELD_LENGTH: usize = 120;

/// Name, trade, and optional business-stage marker split out of the first
/// turn's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityParts {
    pub name: String,
    pub trade: String,
    pub business_stage: Option<String>,
}

/// Interprets raw respondent input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerInterpreter;

impl AnswerInterpreter {
    /// Extracts a leading choice letter from free text.
    ///
    /// The first character after optional bracket/quote/bullet noise must be
    /// `A`-`E` (either case) and must stand alone: a following alphanumeric
    /// character disqualifies it. `"(b)"`, `"C. the middle one"`, and `"a"`
    /// parse; `"elite"` and `"By the way"` do not.
    pub fn extract_choice_letter(input: &str) -> Option<ChoiceLetter> {
        let mut chars = input
            .chars()
            .skip_while(|c| c.is_whitespace() || LEADING_NOISE.contains(c));

        let letter = chars.next().and_then(ChoiceLetter::from_char)?;
        match chars.next() {
            Some(next) if next.is_alphanumeric() => None,
            _ => Some(letter),
        }
    }

    /// Returns true when the text carries enough words to accept as a
    /// free-text answer in place of a letter.
    pub fn is_substantial_free_text(input: &str) -> bool {
        input.split_whitespace().count() >= MIN_FREE_TEXT_WORDS
    }

    /// Splits the first turn's text into identity parts.
    ///
    /// Delimiters are tried in priority order: comma, `" - "`, pipe. A comma
    /// split may carry a third segment naming the business stage. With no
    /// delimiter the first word is the name and the rest the trade; a single
    /// token becomes a name with an empty trade.
    pub fn parse_identity(input: &str) -> IdentityParts {
        let raw = input.trim();

        let (name, trade, stage) = if raw.contains(',') {
            let mut parts = raw.splitn(3, ',');
            (
                parts.next().unwrap_or_default(),
                parts.next().unwrap_or_default(),
                parts.next(),
            )
        } else if raw.contains(" - ") {
            let mut parts = raw.splitn(2, " - ");
            (
                parts.next().unwrap_or_default(),
                parts.next().unwrap_or_default(),
                None,
            )
        } else if raw.contains('|') {
            let mut parts = raw.splitn(2, '|');
            (
                parts.next().unwrap_or_default(),
                parts.next().unwrap_or_default(),
                None,
            )
        } else {
            match raw.split_once(char::is_whitespace) {
                Some((first, rest)) => (first, rest, None),
                None => (raw, "", None),
            }
        };

        let business_stage = stage
            .map(Self::sanitize_field)
            .filter(|s| !s.is_empty());

        IdentityParts {
            name: Self::sanitize_field(name),
            trade: Self::sanitize_field(trade),
            business_stage,
        }
    }

    /// Strips every character outside letters, digits, whitespace, hyphen,
    /// apostrophe, underscore, and period, then collapses whitespace runs.
    fn sanitize_field(raw: &str) -> String {
        let kept: String = raw
            .chars()
            .filter(|c| {
                c.is_alphanumeric()
                    || c.is_whitespace()
                    || matches!(c, '-' | '\'' | '_' | '.')
            })
            .collect();

        let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");
        collapsed.chars().take(MAX_FIELD_LENGTH).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod letters {
        use super::*;

        #[test]
        fn parses_a_bare_letter() {
            assert_eq!(
                AnswerInterpreter::extract_choice_letter("B"),
                Some(ChoiceLetter::B)
            );
        }

        #[test]
        fn parses_lowercase() {
            assert_eq!(
                AnswerInterpreter::extract_choice_letter("a"),
                Some(ChoiceLetter::A)
            );
        }

        #[test]
        fn parses_a_parenthesized_letter() {
            assert_eq!(
                AnswerInterpreter::extract_choice_letter("(b)"),
                Some(ChoiceLetter::B)
            );
        }

        #[test]
        fn parses_a_letter_with_trailing_period() {
            assert_eq!(
                AnswerInterpreter::extract_choice_letter(" C. the middle one"),
                Some(ChoiceLetter::C)
            );
        }

        #[test]
        fn skips_bullet_noise() {
            assert_eq!(
                AnswerInterpreter::extract_choice_letter("- d"),
                Some(ChoiceLetter::D)
            );
            assert_eq!(
                AnswerInterpreter::extract_choice_letter("> *E*"),
                Some(ChoiceLetter::E)
            );
        }

        #[test]
        fn rejects_a_word_starting_with_a_choice_letter() {
            assert_eq!(AnswerInterpreter::extract_choice_letter("elite"), None);
            assert_eq!(AnswerInterpreter::extract_choice_letter("By the way"), None);
        }

        #[test]
        fn rejects_letters_outside_a_through_e() {
            assert_eq!(AnswerInterpreter::extract_choice_letter("F"), None);
            assert_eq!(AnswerInterpreter::extract_choice_letter("z"), None);
        }

        #[test]
        fn rejects_empty_and_whitespace_input() {
            assert_eq!(AnswerInterpreter::extract_choice_letter(""), None);
            assert_eq!(AnswerInterpreter::extract_choice_letter("   "), None);
        }

        #[test]
        fn rejects_a_letter_followed_by_a_digit() {
            assert_eq!(AnswerInterpreter::extract_choice_letter("a1"), None);
        }

        #[test]
        fn rejects_digits() {
            assert_eq!(AnswerInterpreter::extract_choice_letter("42"), None);
        }
    }

    mod free_text {
        use super::*;

        #[test]
        fn five_words_is_substantial() {
            assert!(AnswerInterpreter::is_substantial_free_text(
                "mostly referrals from past customers honestly"
            ));
        }

        #[test]
        fn four_words_is_not() {
            assert!(!AnswerInterpreter::is_substantial_free_text(
                "mostly referrals from customers"
            ));
        }

        #[test]
        fn whitespace_only_is_not() {
            assert!(!AnswerInterpreter::is_substantial_free_text("   \t  "));
        }
    }

    mod identity {
        use super::*;

        #[test]
        fn comma_splits_name_and_trade() {
            let parts = AnswerInterpreter::parse_identity("Wes, handyman");
            assert_eq!(parts.name, "Wes");
            assert_eq!(parts.trade, "handyman");
            assert_eq!(parts.business_stage, None);
        }

        #[test]
        fn third_comma_segment_becomes_the_business_stage() {
            let parts = AnswerInterpreter::parse_identity("Wes, handyman, just starting out");
            assert_eq!(parts.name, "Wes");
            assert_eq!(parts.trade, "handyman");
            assert_eq!(parts.business_stage.as_deref(), Some("just starting out"));
        }

        #[test]
        fn dash_splits_name_and_trade() {
            let parts = AnswerInterpreter::parse_identity("Dana - electrician");
            assert_eq!(parts.name, "Dana");
            assert_eq!(parts.trade, "electrician");
        }

        #[test]
        fn pipe_splits_name_and_trade() {
            let parts = AnswerInterpreter::parse_identity("Sam|roofer");
            assert_eq!(parts.name, "Sam");
            assert_eq!(parts.trade, "roofer");
        }

        #[test]
        fn comma_wins_over_other_delimiters() {
            let parts = AnswerInterpreter::parse_identity("Sam - the roofer, roofing");
            assert_eq!(parts.name, "Sam - the roofer");
            assert_eq!(parts.trade, "roofing");
        }

        #[test]
        fn no_delimiter_splits_on_the_first_space() {
            let parts = AnswerInterpreter::parse_identity("Wes the handyman");
            assert_eq!(parts.name, "Wes");
            assert_eq!(parts.trade, "the handyman");
        }

        #[test]
        fn single_token_is_a_name_without_a_trade() {
            let parts = AnswerInterpreter::parse_identity("Wes");
            assert_eq!(parts.name, "Wes");
            assert_eq!(parts.trade, "");
        }

        #[test]
        fn empty_input_yields_empty_fields() {
            let parts = AnswerInterpreter::parse_identity("   ");
            assert_eq!(parts.name, "");
            assert_eq!(parts.trade, "");
            assert_eq!(parts.business_stage, None);
        }

        #[test]
        fn strips_characters_outside_the_allowed_set() {
            let parts = AnswerInterpreter::parse_identity("Wes!!, handy@man #1");
            assert_eq!(parts.name, "Wes");
            assert_eq!(parts.trade, "handyman 1");
        }

        #[test]
        fn keeps_apostrophes_hyphens_and_periods() {
            let parts = AnswerInterpreter::parse_identity("O'Brien-Smith Jr., HVAC");
            assert_eq!(parts.name, "O'Brien-Smith Jr.");
            assert_eq!(parts.trade, "HVAC");
        }

        #[test]
        fn collapses_internal_whitespace_runs() {
            let parts = AnswerInterpreter::parse_identity("Wes   Jones ,  general   contractor");
            assert_eq!(parts.name, "Wes Jones");
            assert_eq!(parts.trade, "general contractor");
        }

        #[test]
        fn blank_stage_segment_is_dropped() {
            let parts = AnswerInterpreter::parse_identity("Wes, handyman, !!!");
            assert_eq!(parts.business_stage, None);
        }

        #[test]
        fn truncates_very_long_fields() {
            let long_name = "x".repeat(MAX_FIELD_LENGTH * 2);
            let parts = AnswerInterpreter::parse_identity(&format!("{}, plumber", long_name));
            assert_eq!(parts.name.chars().count(), MAX_FIELD_LENGTH);
            assert_eq!(parts.trade, "plumber");
        }
    }
}
