use crate::model::OrderCode;
use thiserror::Error;

/// Why a lookup missed. Callers that only care about "found or not" can
/// match `LookupError::NotFound { .. }` and ignore this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The backend answered and has no such order.
    NoSuchOrder,
    /// The backend could not be reached or answered with an error.
    ServiceUnavailable,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Order not found: {code}")]
    NotFound { code: OrderCode, reason: MissReason },
}

impl LookupError {
    pub fn reason(&self) -> MissReason {
        match self {
            LookupError::NotFound { reason, .. } => *reason,
        }
    }
}
