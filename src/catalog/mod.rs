//! # Ingredient Catalog
//!
//! The catalog is the read-only list of ingredients a pizza can be built
//! from. It is fetched once per session through a
//! [`CatalogSource`](crate::boundary::CatalogSource) and then shared by value:
//! [`Catalog`] is an `Arc` underneath, so the composer, the cart edit flow
//! and display code can each hold their own handle.
//!
//! A failed fetch is never silent. [`load`] retries a bounded number of times
//! and the session records the outcome as a [`CatalogStatus`], which stays
//! `Failed` until an explicit reload succeeds.

pub mod error;

pub use error::*;

use crate::boundary::CatalogSource;
use crate::model::Ingredient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Immutable, ordered ingredient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[Ingredient]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(items: Vec<Ingredient>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Image handle for display; `None` for names the catalog doesn't list.
    pub fn image_for(&self, name: &str) -> Option<&str> {
        self.get(name).map(|i| i.image.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Where the session's catalog stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready(Catalog),
    Failed(CatalogError),
}

impl CatalogStatus {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogStatus::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// Retry policy for [`load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of fetches, at least 1.
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(250),
        }
    }
}

/// Fetches the catalog, retrying transport failures per `policy`.
pub async fn load(source: &dyn CatalogSource, policy: RetryPolicy) -> Result<Catalog, CatalogError> {
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match source.fetch_ingredients().await {
            Ok(items) if items.is_empty() => {
                warn!("Catalog source returned no ingredients");
                return Err(CatalogError::Empty);
            }
            Ok(items) => {
                info!(count = items.len(), attempt, "Catalog loaded");
                return Ok(Catalog::new(items));
            }
            Err(cause) if attempt >= attempts => {
                error!(error = %cause, attempts, "Catalog fetch failed");
                return Err(CatalogError::Unavailable { attempts, cause });
            }
            Err(cause) => {
                warn!(error = %cause, attempt, "Catalog fetch failed, retrying");
                attempt += 1;
                tokio::time::sleep(policy.delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::mock::MockBoundary;
    use crate::boundary::BoundaryError;

    fn quick(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            delay: Duration::from_millis(1),
        }
    }

    #[test]
    fn lookups_by_name() {
        let catalog = Catalog::new(vec![
            Ingredient::new("Cheese", "images/cheese.png"),
            Ingredient::new("Corn", "images/corn.png"),
        ]);
        assert!(catalog.contains("Corn"));
        assert!(!catalog.contains("corn"));
        assert_eq!(catalog.image_for("Cheese"), Some("images/cheese.png"));
        assert_eq!(catalog.image_for("Ham"), None);
    }

    #[tokio::test]
    async fn retries_until_a_fetch_succeeds() {
        let mock = MockBoundary::new();
        mock.expect_catalog()
            .return_err(BoundaryError::Transport("reset".into()));
        mock.expect_catalog()
            .return_ok(vec![Ingredient::new("Sauce", "images/sauce.png")]);

        let catalog = load(&mock, quick(3)).await.unwrap();
        assert_eq!(catalog.len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn gives_up_after_the_last_attempt() {
        let mock = MockBoundary::new();
        mock.expect_catalog().return_err(BoundaryError::Status(503));
        mock.expect_catalog().return_err(BoundaryError::Status(502));

        let err = load(&mock, quick(2)).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::Unavailable {
                attempts: 2,
                cause: BoundaryError::Status(502)
            }
        );
        mock.verify();
    }

    #[tokio::test]
    async fn empty_listing_is_an_error() {
        let mock = MockBoundary::new();
        mock.expect_catalog().return_ok(vec![]);
        assert_eq!(load(&mock, quick(3)).await, Err(CatalogError::Empty));
    }
}
