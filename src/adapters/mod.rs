//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `narrator` - SummaryNarrator implementations (mock)

pub mod narrator;

pub use narrator::{MockNarration, MockNarrationError, MockNarrator};
