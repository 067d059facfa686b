//! # In-Process Backend
//!
//! A stand-in for the REST backend that runs inside the process. Orders live
//! in a [`StoreActor`](store::StoreActor) keyed by random UUID codes, and the
//! catalog is the shop's fixed ingredient list.
//!
//! ```rust,ignore
//! let (actor, backend) = pizza_order::backend::new();
//! let handle = tokio::spawn(actor.run());
//! // share `Arc::new(backend)` as both CatalogSource and OrderBoundary...
//! drop(backend);
//! handle.await?;
//! ```

pub mod error;
pub mod orders;
pub mod store;

pub use error::*;

use crate::boundary::{BoundaryError, CatalogSource, OrderBoundary};
use crate::model::{Ingredient, OrderCode, OrderSubmission, StoredOrder};
use async_trait::async_trait;
use store::{StoreActor, StoreClient};
use tracing::instrument;
use uuid::Uuid;

const DEFAULT_INGREDIENTS: [&str; 6] = ["Sauce", "Cheese", "Corn", "Mushrooms", "Peppers", "Onions"];

/// The shop's ingredient list, each with an `images/<name>.png` handle.
pub fn default_catalog() -> Vec<Ingredient> {
    DEFAULT_INGREDIENTS
        .iter()
        .map(|name| Ingredient::new(*name, format!("images/{}.png", name.to_lowercase())))
        .collect()
}

/// Creates the order store actor and a backend handle bound to it.
///
/// The actor must be spawned (`tokio::spawn(actor.run())`) before the
/// backend can answer order requests.
pub fn new() -> (StoreActor<StoredOrder>, InMemoryBackend) {
    let (actor, orders) = StoreActor::new(32, || OrderCode::new(Uuid::new_v4().to_string()));
    let backend = InMemoryBackend {
        orders,
        catalog: default_catalog(),
    };
    (actor, backend)
}

#[derive(Clone)]
pub struct InMemoryBackend {
    orders: StoreClient<StoredOrder>,
    catalog: Vec<Ingredient>,
}

#[async_trait]
impl CatalogSource for InMemoryBackend {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, BoundaryError> {
        Ok(self.catalog.clone())
    }
}

#[async_trait]
impl OrderBoundary for InMemoryBackend {
    #[instrument(skip(self, submission), fields(pizzas = submission.pizzas.len()))]
    async fn submit_order(&self, submission: &OrderSubmission) -> Result<OrderCode, BoundaryError> {
        Ok(self.orders.create(submission.clone()).await?)
    }

    #[instrument(skip(self, code), fields(code = %code))]
    async fn lookup_order(&self, code: &OrderCode) -> Result<StoredOrder, BoundaryError> {
        self.orders
            .get(code.clone())
            .await?
            .ok_or(BoundaryError::NotFound)
    }
}
