//! StartSessionHandler - Command handler for opening interview sessions.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::interview::InterviewEngine;

/// Command to open a new interview session.
///
/// Carries no payload: the respondent introduces themselves on the first
/// turn, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartSessionCommand;

/// Result of successfully opening a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session_id: SessionId,
    /// How many categories the interview will walk through.
    pub category_count: usize,
}

/// Handler for opening sessions.
pub struct StartSessionHandler {
    engine: Arc<InterviewEngine>,
    registry: Arc<SessionRegistry>,
}

impl StartSessionHandler {
    pub fn new(engine: Arc<InterviewEngine>, registry: Arc<SessionRegistry>) -> Self {
        Self { engine, registry }
    }

    pub async fn handle(
        &self,
        _cmd: StartSessionCommand,
    ) -> Result<StartSessionResult, DomainError> {
        // 1. Mint an id and a zero-valued state sized to the catalog
        let state = self.engine.start_session(SessionId::new());

        // 2. Register it so turns can resolve it
        let session_id = self.registry.register(state).await;

        Ok(StartSessionResult {
            session_id,
            category_count: self.engine.catalog().len(),
        })
    }
}
