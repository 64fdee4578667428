//! Question and follow-up types for the interview catalog.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::ChoiceLetter;

use super::AnswerOption;

/// A single prompt with its lettered options.
///
/// A question with no options is free-text: it accepts any answer and is
/// only valid as a follow-up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Fewest options a lettered question may offer.
    pub const MIN_OPTIONS: usize = 2;

    /// Most options a lettered question may offer.
    pub const MAX_OPTIONS: usize = 5;

    pub(crate) fn new(prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }

    /// Returns the question prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the options in letter order.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Looks up the option carrying the given letter.
    pub fn option_for(&self, letter: ChoiceLetter) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.letter() == letter)
    }

    /// Returns the set of letters this question offers.
    pub fn letters(&self) -> BTreeSet<ChoiceLetter> {
        self.options.iter().map(|o| o.letter()).collect()
    }

    /// Returns true when this question accepts free text instead of a letter.
    pub fn is_free_text(&self) -> bool {
        self.options.is_empty()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prompt)?;
        for option in &self.options {
            write!(f, "\n{}", option.label())?;
        }
        Ok(())
    }
}

/// Condition under which a follow-up fires after a screener answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpTrigger {
    /// Fires for every lettered screener answer.
    Any,
    /// Fires only for the listed letters.
    Letters(BTreeSet<ChoiceLetter>),
}

impl FollowUpTrigger {
    /// Returns true if the trigger fires for the given screener letter.
    pub fn contains(&self, letter: ChoiceLetter) -> bool {
        match self {
            FollowUpTrigger::Any => true,
            FollowUpTrigger::Letters(letters) => letters.contains(&letter),
        }
    }
}

/// An optional deeper question asked after qualifying screener answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FollowUp {
    trigger: FollowUpTrigger,
    question: Question,
}

impl FollowUp {
    pub(crate) fn new(trigger: FollowUpTrigger, question: Question) -> Self {
        Self { trigger, question }
    }

    /// Returns the trigger condition.
    pub fn trigger(&self) -> &FollowUpTrigger {
        &self.trigger
    }

    /// Returns the follow-up question.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Returns true if this follow-up fires for the given screener letter.
    pub fn triggers_on(&self, letter: ChoiceLetter) -> bool {
        self.trigger.contains(letter)
    }
}
