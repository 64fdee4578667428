//! ProcessTurnHandler - Command handler for advancing an interview one turn.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::interview::{InterviewEngine, TurnOutcome};

/// Advice returned when input arrives for a finished interview.
const RESET_ADVICE: &str =
    "This assessment is already wrapped up. Ask to reset the session if you want to run it again.";

/// Command to process one turn of respondent input.
#[derive(Debug, Clone)]
pub struct ProcessTurnCommand {
    pub session_id: SessionId,
    pub input: String,
}

/// Result of a processed turn.
#[derive(Debug, Clone)]
pub struct ProcessTurnResult {
    pub outcome: TurnOutcome,
}

/// Handler for turn processing.
pub struct ProcessTurnHandler {
    engine: Arc<InterviewEngine>,
    registry: Arc<SessionRegistry>,
}

impl ProcessTurnHandler {
    pub fn new(engine: Arc<InterviewEngine>, registry: Arc<SessionRegistry>) -> Self {
        Self { engine, registry }
    }

    pub async fn handle(&self, cmd: ProcessTurnCommand) -> Result<ProcessTurnResult, DomainError> {
        // 1. Resolve the session and hold its lock for the whole turn
        let session = self.registry.resolve(cmd.session_id).await?;
        let mut state = session.lock().await;

        // 2. Run the turn; a finished session turns into reset advice
        let outcome = match self.engine.process_turn(&mut state, &cmd.input) {
            Ok(outcome) => outcome,
            Err(err) if err.code == ErrorCode::SessionComplete => TurnOutcome::Clarification {
                question: RESET_ADVICE.to_string(),
            },
            Err(err) => return Err(err),
        };

        Ok(ProcessTurnResult { outcome })
    }
}
