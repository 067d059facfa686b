//! Error types for calls that leave the process.

use thiserror::Error;

/// Failures reported by a [`CatalogSource`](super::CatalogSource) or
/// [`OrderBoundary`](super::OrderBoundary).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoundaryError {
    /// The request never produced a response (connect, timeout, reset).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned status {0}")]
    Status(u16),

    /// The backend has no order under the requested code.
    #[error("No such order")]
    NotFound,

    /// The backend refused the submission.
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The response body could not be understood.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The in-process backend has shut down.
    #[error("Backend closed")]
    Closed,
}

impl BoundaryError {
    /// True when the backend positively reported that the order does not exist,
    /// as opposed to failing to answer.
    pub fn is_missing(&self) -> bool {
        match self {
            BoundaryError::NotFound => true,
            BoundaryError::Status(status) => *status == 404,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for BoundaryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            BoundaryError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            BoundaryError::Status(status.as_u16())
        } else {
            BoundaryError::Transport(e.to_string())
        }
    }
}
