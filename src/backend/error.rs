use crate::boundary::BoundaryError;
use thiserror::Error;

/// Errors that can occur within the record store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,

    #[error("Store dropped response channel")]
    Dropped,

    #[error("Record rejected: {0}")]
    Rejected(String),
}

impl From<StoreError> for BoundaryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Closed | StoreError::Dropped => BoundaryError::Closed,
            StoreError::Rejected(reason) => BoundaryError::Rejected(reason),
        }
    }
}
