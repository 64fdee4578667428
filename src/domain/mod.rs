//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Question catalog types, validation, and the embedded default
//! - `interview` - Answer interpretation, session state, and the turn processor
//! - `scoring` - Weighted score and tier-signal accumulation
//! - `recommendation` - Tier rules, offer matching, and the final record

pub mod catalog;
pub mod foundation;
pub mod interview;
pub mod recommendation;
pub mod scoring;
