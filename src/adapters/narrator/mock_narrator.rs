//! Mock narrator for testing.
//!
//! Provides a configurable implementation of the SummaryNarrator port,
//! allowing tests to run without a real narration backend.
//!
//! # Features
//!
//! - Pre-configured narrations
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let narrator = MockNarrator::new()
//!     .with_narration("You're in a strong spot, Dale.")
//!     .with_delay(Duration::from_millis(100));
//!
//! let summary = narrator.narrate(request).await?;
//! assert_eq!(summary, "You're in a strong spot, Dale.");
//! ```

use async_trait::async_trait;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{NarrationChunk, NarrationError, NarrationRequest, SummaryNarrator};

/// Mock narrator for testing.
///
/// Configurable to return specific narrations, simulate delays, or inject
/// errors.
#[derive(Debug, Clone, Default)]
pub struct MockNarrator {
    /// Pre-configured narrations (consumed in order).
    narrations: Arc<Mutex<VecDeque<MockNarration>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<NarrationRequest>>>,
}

/// A configured mock narration.
#[derive(Debug, Clone)]
pub enum MockNarration {
    /// Return this text as the narration.
    Success(String),
    /// Return an error.
    Error(MockNarrationError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockNarrationError {
    /// Simulate a malformed request rejection.
    InvalidRequest { message: String },
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate backend unavailability.
    Unavailable { message: String },
    /// Simulate a network failure.
    Network { message: String },
    /// Simulate a timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockNarrationError> for NarrationError {
    fn from(err: MockNarrationError) -> Self {
        match err {
            MockNarrationError::InvalidRequest { message } => {
                NarrationError::invalid_request(message)
            }
            MockNarrationError::RateLimited { retry_after_secs } => {
                NarrationError::rate_limited(retry_after_secs)
            }
            MockNarrationError::Unavailable { message } => NarrationError::unavailable(message),
            MockNarrationError::Network { message } => NarrationError::network(message),
            MockNarrationError::Timeout { timeout_secs } => {
                NarrationError::Timeout { timeout_secs }
            }
        }
    }
}

impl MockNarrator {
    /// Creates a new mock narrator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a narration to the queue.
    pub fn with_narration(self, content: impl Into<String>) -> Self {
        let mut narrations = self.narrations.lock().unwrap();
        narrations.push_back(MockNarration::Success(content.into()));
        drop(narrations);
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockNarrationError) -> Self {
        let mut narrations = self.narrations.lock().unwrap();
        narrations.push_back(MockNarration::Error(error));
        drop(narrations);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this narrator.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<NarrationRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next narration or a default.
    fn next_narration(&self) -> MockNarration {
        self.narrations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockNarration::Success("Mock narration".to_string()))
    }
}

#[async_trait]
impl SummaryNarrator for MockNarrator {
    async fn narrate(&self, request: NarrationRequest) -> Result<String, NarrationError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_narration() {
            MockNarration::Success(content) => Ok(content),
            MockNarration::Error(err) => Err(err.into()),
        }
    }

    async fn stream_narrate(
        &self,
        request: NarrationRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<NarrationChunk, NarrationError>> + Send>>, NarrationError>
    {
        // Record the call
        self.calls.lock().unwrap().push(request);

        // Simulate initial delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_narration() {
            MockNarration::Success(content) => {
                // Split into word chunks to simulate streaming
                let word_chunks: Vec<Result<NarrationChunk, NarrationError>> = content
                    .split_whitespace()
                    .map(|word| Ok(NarrationChunk::content(format!("{} ", word))))
                    .chain(std::iter::once(Ok(NarrationChunk::final_chunk())))
                    .collect();

                Ok(Box::pin(stream::iter(word_chunks)))
            }
            MockNarration::Error(err) => Err(err.into()),
        }
    }
}
