//! Error types for lazy-stream
//!
//! Running out of elements is never an error: pulls signal exhaustion with
//! `None`. The errors here cover construction misuse and the timing helpers.

/// Main error type for lazy-stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A prime-factor stream was asked to factor zero or a negative number
    #[error("Cannot factor non-positive target: {0}")]
    NonPositiveTarget(i64),
    /// Configuration could not be parsed or applied
    #[error("Invalid stream configuration: {0}")]
    InvalidConfig(String),
    /// A benchmark worker thread panicked before finishing its calls
    #[error("Worker thread {0} panicked")]
    ThreadPanicked(usize),
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::InvalidConfig(err.to_string())
    }
}

/// Result type for lazy-stream operations
pub type StreamResult<T> = Result<T, StreamError>;
