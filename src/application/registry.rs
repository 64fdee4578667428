//! In-memory session registry.
//!
//! Holds the live state of every open interview session. Each session sits
//! behind its own async mutex, so turns for one session serialize while
//! different sessions proceed concurrently. The outer map lock is held only
//! long enough to resolve an entry, never across a turn.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::interview::InterviewState;

/// Shared handle to one session's mutable state.
pub type SharedSession = Arc<Mutex<InterviewState>>;

/// Tracks live interview sessions by id.
///
/// State lives here for the duration of the session only; there is no
/// persistence behind the registry.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, SharedSession>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session state under its own id and returns that id.
    ///
    /// Re-registering an id replaces the previous state.
    pub async fn register(&self, state: InterviewState) -> SessionId {
        let session_id = state.session_id();
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session_id, Arc::new(Mutex::new(state)));
        session_id
    }

    /// Resolves the shared handle for a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` if the id is not registered.
    pub async fn resolve(&self, session_id: SessionId) -> Result<SharedSession, DomainError> {
        let sessions = self.sessions.lock().await;
        sessions.get(&session_id).cloned().ok_or_else(|| {
            DomainError::new(ErrorCode::SessionNotFound, "No live session with this id")
                .with_detail("session_id", session_id.to_string())
        })
    }

    /// Removes a session, returning whether it existed.
    pub async fn remove(&self, session_id: SessionId) -> bool {
        self.sessions.lock().await.remove(&session_id).is_some()
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Returns true when no sessions are live.
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
