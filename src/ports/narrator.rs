//! Summary narrator port.
//!
//! Abstracts the collaborator that turns a finished assessment into
//! conversational prose. The interview engine produces structured results;
//! a narrator renders them as a spoken-style summary for the respondent.
//!
//! # Design
//!
//! - Provider-agnostic: implementations may call an LLM, a template
//!   renderer, or return canned text in tests
//! - Async-first with both blocking and streaming delivery
//! - Errors carry enough context to decide on retry
//!
//! # Example
//!
//! ```ignore
//! let request = NarrationRequest::new(profile, answers, recommendation);
//! let summary = narrator.narrate(request).await?;
//! println!("{}", summary);
//! ```

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::domain::interview::{RecordedAnswer, RespondentProfile};
use crate::domain::recommendation::Recommendation;

/// Everything a narrator needs to write the closing summary.
///
/// The request is a snapshot: it owns its data so implementations can move
/// it across task boundaries without borrowing session state.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationRequest {
    /// Who the summary addresses.
    profile: RespondentProfile,
    /// The full answer transcript, in the order given.
    answers: Vec<RecordedAnswer>,
    /// The computed outcome the prose must stay faithful to.
    recommendation: Recommendation,
}

impl NarrationRequest {
    /// Creates a narration request from a finished session's parts.
    pub fn new(
        profile: RespondentProfile,
        answers: Vec<RecordedAnswer>,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            profile,
            answers,
            recommendation,
        }
    }

    /// Returns the respondent profile.
    pub fn profile(&self) -> &RespondentProfile {
        &self.profile
    }

    /// Returns the recorded answers.
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    /// Returns the recommendation the narration describes.
    pub fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }
}

/// A chunk of streamed narration.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationChunk {
    /// Text delta for this chunk (may be empty on the final chunk).
    pub delta: String,
    /// Whether this is the last chunk of the narration.
    pub is_final: bool,
}

impl NarrationChunk {
    /// Creates a content chunk.
    pub fn content(delta: impl Into<String>) -> Self {
        Self {
            delta: delta.into(),
            is_final: false,
        }
    }

    /// Creates the final chunk, closing the stream.
    pub fn final_chunk() -> Self {
        Self {
            delta: String::new(),
            is_final: true,
        }
    }

    /// Returns true if this chunk ends the narration.
    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

/// Errors from narration backends.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    /// The backend rejected the request as malformed.
    #[error("invalid narration request: {message}")]
    InvalidRequest { message: String },

    /// The backend is rate limiting us.
    #[error("narrator rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// The backend is temporarily unavailable.
    #[error("narrator unavailable: {message}")]
    Unavailable { message: String },

    /// A network-level failure reaching the backend.
    #[error("narrator network error: {message}")]
    Network { message: String },

    /// The request did not finish in time.
    #[error("narration timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl NarrationError {
    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Returns true if retrying the same request might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. }
                | Self::Unavailable { .. }
                | Self::Network { .. }
                | Self::Timeout { .. }
        )
    }
}

/// Port for rendering assessment results as prose.
///
/// Implementations must be `Send + Sync` so they can be shared behind an
/// `Arc` across concurrent sessions.
#[async_trait]
pub trait SummaryNarrator: Send + Sync {
    /// Renders the full narration in one call.
    ///
    /// # Errors
    ///
    /// Returns a `NarrationError` if the backend rejects the request or
    /// fails before producing a complete summary.
    async fn narrate(&self, request: NarrationRequest) -> Result<String, NarrationError>;

    /// Renders the narration as a stream of chunks.
    ///
    /// The stream yields content chunks followed by exactly one final
    /// chunk. Implementations that cannot stream may yield the whole
    /// text as a single content chunk.
    ///
    /// # Errors
    ///
    /// Returns a `NarrationError` if the stream cannot be opened. Errors
    /// after that point are yielded through the stream itself.
    async fn stream_narrate(
        &self,
        request: NarrationRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<NarrationChunk, NarrationError>> + Send>>, NarrationError>;
}
