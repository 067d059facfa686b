//! # HTTP Backend
//!
//! [`HttpBackend`] speaks the REST dialect of the order backend:
//!
//! | Operation | Request | Success body |
//! |-----------|---------|--------------|
//! | Catalog | `GET /api/ingredients` | JSON array of `{name, image}` |
//! | Submit | `POST /api/orders` (JSON) | Bare order code as text |
//! | Lookup | `GET /api/orders/{code}` | JSON order, or an empty body for unknown codes |
//!
//! Any non-success status surfaces as [`BoundaryError::Status`]; a `404` or an
//! empty lookup body as [`BoundaryError::NotFound`].

use super::{BoundaryError, CatalogSource, OrderBoundary};
use crate::model::{Ingredient, OrderCode, OrderSubmission, StoredOrder};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// `reqwest`-backed implementation of both boundary traits.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, BoundaryError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, BoundaryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BoundaryError::Transport(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl CatalogSource for HttpBackend {
    #[instrument(skip(self))]
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, BoundaryError> {
        let url = self.endpoint(&["api", "ingredients"])?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Catalog fetch failed");
            return Err(BoundaryError::Status(status.as_u16()));
        }

        let ingredients: Vec<Ingredient> = response.json().await?;
        debug!(count = ingredients.len(), "Catalog fetched");
        Ok(ingredients)
    }
}

#[async_trait]
impl OrderBoundary for HttpBackend {
    #[instrument(skip(self, submission))]
    async fn submit_order(&self, submission: &OrderSubmission) -> Result<OrderCode, BoundaryError> {
        debug!(?submission, "Posting order");
        let url = self.endpoint(&["api", "orders"])?;
        let response = self.http.post(url).json(submission).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Order submission refused");
            return Err(BoundaryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let code = body.trim().trim_matches('"');
        if code.is_empty() {
            return Err(BoundaryError::Decode("empty order code".to_string()));
        }
        info!(code, "Order accepted");
        Ok(OrderCode::new(code))
    }

    #[instrument(skip(self))]
    async fn lookup_order(&self, code: &OrderCode) -> Result<StoredOrder, BoundaryError> {
        let url = self.endpoint(&["api", "orders", code.as_str()])?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BoundaryError::NotFound);
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "Order lookup failed");
            return Err(BoundaryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Err(BoundaryError::NotFound);
        }
        serde_json::from_str(body).map_err(|e| BoundaryError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments_and_escapes_codes() {
        let backend = HttpBackend::new(
            Url::parse("http://localhost:8080/shop/").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap();

        let url = backend.endpoint(&["api", "orders", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/shop/api/orders/a%20b%2Fc");
    }
}
