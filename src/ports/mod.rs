//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Narration Ports
//!
//! - `SummaryNarrator` - Renders a finished assessment as conversational prose

mod narrator;

pub use narrator::{NarrationChunk, NarrationError, NarrationRequest, SummaryNarrator};
