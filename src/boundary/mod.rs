//! # External Boundaries
//!
//! The session never talks to the network directly. Everything it needs from
//! the outside world goes through two traits:
//!
//! - [`CatalogSource`] - the read-only ingredient list, fetched once per session.
//! - [`OrderBoundary`] - order persistence: submit an order and receive a code,
//!   or look an order up by code.
//!
//! ## Implementations
//!
//! | Type | Backing | Use Case |
//! |------|---------|----------|
//! | [`HttpBackend`](http::HttpBackend) | REST backend via `reqwest` | Production |
//! | [`InMemoryBackend`](crate::backend::InMemoryBackend) | In-process record-store actor | Demo, integration tests |
//! | [`MockBoundary`](mock::MockBoundary) | Scripted expectations | Unit tests, error injection |
//!
//! All of them are `Send + Sync` and shared behind an `Arc`.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;

use crate::model::{Ingredient, OrderCode, OrderSubmission, StoredOrder};
use async_trait::async_trait;

/// Source of the ingredient catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the catalog in display order.
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, BoundaryError>;
}

/// The order-persistence backend.
#[async_trait]
pub trait OrderBoundary: Send + Sync {
    /// Places an order. On success the backend answers with the new code.
    async fn submit_order(&self, submission: &OrderSubmission) -> Result<OrderCode, BoundaryError>;

    /// Fetches a stored order.
    async fn lookup_order(&self, code: &OrderCode) -> Result<StoredOrder, BoundaryError>;
}
