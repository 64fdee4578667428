//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over live sessions.

mod narrate_summary;
mod process_turn;
mod reset_session;
mod start_session;

pub use narrate_summary::{NarrateSummaryCommand, NarrateSummaryHandler, NarrateSummaryResult};
pub use process_turn::{ProcessTurnCommand, ProcessTurnHandler, ProcessTurnResult};
pub use reset_session::{ResetSessionCommand, ResetSessionHandler, ResetSessionResult};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
