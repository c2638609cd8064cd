//! Error types.

use thiserror::Error;

/// Errors surfaced by table components.
///
/// Most components never fail: misuse degrades to default values. Only
/// scheduling (which needs a tokio runtime) and sort handlers can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A timer or background task was requested outside a tokio runtime.
    #[error("no tokio runtime available to schedule {0}")]
    NoRuntime(&'static str),

    /// A caller-supplied sort handler reported a failure.
    #[error("sort handler failed: {0}")]
    HandlerFailed(#[from] SortError),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure reported by a caller-supplied sort handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SortError {
    /// Error message
    pub message: String,
}

impl SortError {
    /// Create a new sort error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for SortError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SortError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
