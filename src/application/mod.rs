//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations over live sessions and
//! coordinates with ports. The session registry keeps per-session state
//! isolated; handlers hold the engine and the ports they need.

pub mod handlers;
mod registry;

pub use handlers::{
    // Session handlers
    NarrateSummaryCommand, NarrateSummaryHandler, NarrateSummaryResult,
    ProcessTurnCommand, ProcessTurnHandler, ProcessTurnResult,
    ResetSessionCommand, ResetSessionHandler, ResetSessionResult,
    StartSessionCommand, StartSessionHandler, StartSessionResult,
};
pub use registry::{SessionRegistry, SharedSession};
