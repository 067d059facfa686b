//! Error types for pizza composition.

use thiserror::Error;

/// Errors that can occur while composing a pizza.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposerError {
    /// The ingredient is not listed in the catalog.
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    /// The ingredient is already selected for this pizza.
    #[error("This ingredient is already selected for this pizza: {0}")]
    DuplicateIngredient(String),

    /// Too few ingredients to commit the pizza.
    #[error("Please select at least 2 ingredients (selected {count})")]
    InsufficientIngredients { count: usize },
}
