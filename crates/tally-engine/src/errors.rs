//! Engine error types.

use thiserror::Error;

/// Failure writing to an output sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("sink rejected write: {0}")]
    Rejected(String),
}

/// A fault inside one event handler.
///
/// Caught at the dispatcher's failure boundary, logged as a single ERROR
/// line, and never propagated further — one bad event must not terminate
/// logging for the rest of the session.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("malformed event: {0}")]
    MalformedEvent(&'static str),
    #[error("sink failure: {0}")]
    Sink(#[from] SinkError),
}

/// Fatal session initialization fault. The pipeline never reaches Active.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("roster poll interval must be positive and finite, got {0}")]
    BadPollInterval(f64),
    #[error("AI controller sentinel must not be empty")]
    EmptyAiSentinel,
}
