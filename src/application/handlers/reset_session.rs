//! ResetSessionHandler - Command handler for restarting an interview.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::foundation::{DomainError, SessionId};

/// Command to reset a session to its opening state.
#[derive(Debug, Clone, Copy)]
pub struct ResetSessionCommand {
    pub session_id: SessionId,
}

/// Result of a reset.
#[derive(Debug, Clone, Copy)]
pub struct ResetSessionResult {
    pub session_id: SessionId,
}

/// Handler for session resets.
///
/// Resetting replaces the state with a fresh zero-valued instance under the
/// same id. Resetting an already-fresh session is a no-op, so the operation
/// is idempotent.
pub struct ResetSessionHandler {
    registry: Arc<SessionRegistry>,
}

impl ResetSessionHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        cmd: ResetSessionCommand,
    ) -> Result<ResetSessionResult, DomainError> {
        let session = self.registry.resolve(cmd.session_id).await?;
        let mut state = session.lock().await;
        state.reset();

        Ok(ResetSessionResult {
            session_id: cmd.session_id,
        })
    }
}
