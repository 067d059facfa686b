use crate::model::ValidationError;
use thiserror::Error;

/// Errors that can occur while submitting an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("An order submission is already in progress")]
    AlreadyInProgress,

    #[error("Cannot submit an empty cart")]
    EmptyCart,

    #[error("Invalid customer details: {0}")]
    InvalidCustomer(#[from] ValidationError),

    #[error("Order submission failed: {0}")]
    SubmissionFailed(String),

    /// A completion arrived for a submission that is no longer in flight.
    #[error("Completion does not belong to the submission in flight")]
    StaleCompletion,
}
