use crate::composer::ComposerError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("No pizza at position {index} (cart holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Please select at least 2 ingredients (selected {count})")]
    InsufficientIngredients { count: usize },

    #[error("No pizza is being edited")]
    NoActiveEdit,

    #[error("The cart is locked while an order is being submitted")]
    SubmissionInProgress,

    #[error(transparent)]
    Composer(ComposerError),
}

/// A commit below the minimum surfaces as the cart's own variant.
impl From<ComposerError> for CartError {
    fn from(e: ComposerError) -> Self {
        match e {
            ComposerError::InsufficientIngredients { count } => {
                CartError::InsufficientIngredients { count }
            }
            other => CartError::Composer(other),
        }
    }
}
