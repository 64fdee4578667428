//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Trade Compass domain.

mod errors;
mod ids;
mod letter;
mod percentage;
mod state_machine;
mod tag;
mod tier;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use letter::ChoiceLetter;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use tag::Tag;
pub use tier::Tier;
pub use timestamp::Timestamp;
