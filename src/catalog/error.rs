//! Error types for catalog loading.

use crate::boundary::BoundaryError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Every fetch attempt failed; `cause` is the last failure.
    #[error("Ingredient catalog unavailable after {attempts} attempt(s): {cause}")]
    Unavailable { attempts: u32, cause: BoundaryError },

    /// The source answered but listed no ingredients.
    #[error("Ingredient catalog is empty")]
    Empty,
}
