//! Narrator Adapters.
//!
//! Implementations of the SummaryNarrator port.
//!
//! ## Available Adapters
//!
//! - `MockNarrator` - Configurable mock for testing

mod mock_narrator;

pub use mock_narrator::{MockNarration, MockNarrationError, MockNarrator};
