//! The interview state machine: interpretation, session state, and the
//! turn processor.

mod answer;
mod engine;
mod interpreter;
mod outcome;
mod phase;
mod profile;
mod state;

pub use answer::{AnswerKind, RecordedAnswer};
pub use engine::InterviewEngine;
pub use interpreter::{
    AnswerInterpreter, IdentityParts, MAX_FIELD_LENGTH, MIN_FREE_TEXT_WORDS,
};
pub use outcome::TurnOutcome;
pub use phase::InterviewPhase;
pub use profile::RespondentProfile;
pub use state::InterviewState;
