//! NarrateSummaryHandler - Command handler for rendering the closing summary.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::interview::InterviewEngine;
use crate::domain::recommendation::Recommendation;
use crate::ports::{NarrationRequest, SummaryNarrator};

/// Command to narrate a finished session.
#[derive(Debug, Clone, Copy)]
pub struct NarrateSummaryCommand {
    pub session_id: SessionId,
}

/// Result of a narration.
#[derive(Debug, Clone)]
pub struct NarrateSummaryResult {
    /// Prose from the narrator, opaque to this crate.
    pub narration: String,
    /// The structured record the prose was rendered from.
    pub recommendation: Recommendation,
}

/// Handler for summary narration.
pub struct NarrateSummaryHandler {
    engine: Arc<InterviewEngine>,
    registry: Arc<SessionRegistry>,
    narrator: Arc<dyn SummaryNarrator>,
}

impl NarrateSummaryHandler {
    pub fn new(
        engine: Arc<InterviewEngine>,
        registry: Arc<SessionRegistry>,
        narrator: Arc<dyn SummaryNarrator>,
    ) -> Self {
        Self {
            engine,
            registry,
            narrator,
        }
    }

    pub async fn handle(
        &self,
        cmd: NarrateSummaryCommand,
    ) -> Result<NarrateSummaryResult, DomainError> {
        // 1. Resolve the session and snapshot what the narrator needs
        let session = self.registry.resolve(cmd.session_id).await?;
        let state = session.lock().await;

        let recommendation = self.engine.summarize(&state)?;
        let profile = state.profile().cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                "Completed session is missing its profile",
            )
            .with_detail("session_id", cmd.session_id.to_string())
        })?;
        let answers = state.answers().to_vec();

        // 2. Release the session before the slow external call
        drop(state);

        // 3. Narrate
        let request = NarrationRequest::new(profile, answers, recommendation.clone());
        let narration = self.narrator.narrate(request).await.map_err(|err| {
            DomainError::new(ErrorCode::NarrationFailed, "Narration backend failed")
                .with_detail("session_id", cmd.session_id.to_string())
                .with_detail("retryable", err.is_retryable().to_string())
                .with_detail("source", err.to_string())
        })?;

        Ok(NarrateSummaryResult {
            narration,
            recommendation,
        })
    }
}
