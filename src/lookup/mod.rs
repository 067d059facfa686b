//! # Order Lookup
//!
//! Code → [`OrderRecord`] with no local state: every call goes to the
//! boundary. Any non-success answer is reported as
//! [`LookupError::NotFound`]; the attached [`MissReason`] says whether the
//! backend actually denied the order or just failed to answer.
//!
//! Lookups may overlap. [`LookupTracker`] issues increasing tokens so a view
//! can drop responses that arrive after a newer lookup was started.

pub mod error;

pub use error::*;

use crate::boundary::OrderBoundary;
use crate::model::{OrderCode, OrderRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct OrderLookup {
    boundary: Arc<dyn OrderBoundary>,
}

impl OrderLookup {
    pub fn new(boundary: Arc<dyn OrderBoundary>) -> Self {
        Self { boundary }
    }

    #[instrument(skip(self, code), fields(code = %code))]
    pub async fn lookup(&self, code: &OrderCode) -> Result<OrderRecord, LookupError> {
        if code.as_str().trim().is_empty() {
            return Err(LookupError::NotFound {
                code: code.clone(),
                reason: MissReason::NoSuchOrder,
            });
        }
        match self.boundary.lookup_order(code).await {
            Ok(stored) => {
                let record = OrderRecord::from(stored);
                info!(pizzas = record.pizzas().len(), "Order found");
                Ok(record)
            }
            Err(e) => {
                let reason = if e.is_missing() {
                    MissReason::NoSuchOrder
                } else {
                    MissReason::ServiceUnavailable
                };
                warn!(error = %e, ?reason, "Order lookup missed");
                Err(LookupError::NotFound {
                    code: code.clone(),
                    reason,
                })
            }
        }
    }
}

/// Hands out lookup tokens; only the newest token is current.
#[derive(Debug, Default)]
pub struct LookupTracker {
    latest: AtomicU64,
}

impl LookupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a lookup and returns its token.
    pub fn start(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still belongs to the most recent lookup.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}
