//! # Mock Boundary & Testing Guide
//!
//! [`MockBoundary`] implements both [`CatalogSource`] and [`OrderBoundary`]
//! entirely in memory. Each call consumes the next scripted expectation for
//! its operation, so tests decide exactly what the "backend" says.
//!
//! ## When to use the Mock vs the In-Memory Backend
//!
//! | Feature | MockBoundary | InMemoryBackend |
//! |---------|--------------|-----------------|
//! | **State** | None (scripted replies) | Real stored orders |
//! | **Error Injection** | Easy (`return_err`) | Only validation rejects |
//! | **Timing Control** | `deferred()` holds a call in flight | Replies immediately |
//! | **Use Case** | Session/submitter logic | End-to-end flows |
//!
//! ## Example
//!
//! ```rust
//! use pizza_order::boundary::mock::MockBoundary;
//! use pizza_order::boundary::{BoundaryError, OrderBoundary};
//! use pizza_order::model::OrderCode;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockBoundary::new();
//!     mock.expect_lookup("ZZZZ").return_err(BoundaryError::NotFound);
//!
//!     let result = mock.lookup_order(&OrderCode::new("ZZZZ")).await;
//!     assert_eq!(result, Err(BoundaryError::NotFound));
//!     mock.verify();
//! }
//! ```
//!
//! ## Holding a Request in Flight
//!
//! `deferred()` returns the sending half of a oneshot channel. The call under
//! test stays suspended until the test sends the outcome, which is how the
//! at-most-one-submission rule is exercised:
//!
//! ```rust,ignore
//! let release = mock.expect_submit().deferred();
//! let first = tokio::spawn(async move { session.submit_order(details).await });
//! // ... a second submit here fails with AlreadyInProgress ...
//! release.send(Ok(OrderCode::new("AB12"))).unwrap();
//! ```

use super::{BoundaryError, CatalogSource, OrderBoundary};
use crate::model::{Ingredient, OrderCode, OrderSubmission, StoredOrder};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

type Outcome<T> = Result<T, BoundaryError>;

/// A scripted reply: either immediate, or released later by the test.
enum Reply<T> {
    Ready(Outcome<T>),
    Deferred(oneshot::Receiver<Outcome<T>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Outcome<T> {
        match self {
            Reply::Ready(outcome) => outcome,
            Reply::Deferred(receiver) => receiver.await.unwrap_or(Err(BoundaryError::Closed)),
        }
    }
}

struct LookupExpectation {
    code: OrderCode,
    reply: Reply<StoredOrder>,
}

#[derive(Default)]
struct Script {
    catalog: VecDeque<Reply<Vec<Ingredient>>>,
    submits: VecDeque<Reply<OrderCode>>,
    lookups: VecDeque<LookupExpectation>,
    received_submissions: Vec<OrderSubmission>,
    received_lookups: Vec<OrderCode>,
}

impl Script {
    fn remaining(&self) -> usize {
        self.catalog.len() + self.submits.len() + self.lookups.len()
    }
}

fn lock(script: &Mutex<Script>) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A boundary with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = MockBoundary::new();
/// mock.expect_catalog().return_ok(ingredients);
/// mock.expect_submit().return_ok(OrderCode::new("AB12"));
///
/// // Hand `Arc::new(mock)` to a Session...
/// mock.verify(); // Ensures every expectation was consumed
/// ```
#[derive(Default)]
pub struct MockBoundary {
    script: Arc<Mutex<Script>>,
}

impl MockBoundary {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a catalog fetch.
    pub fn expect_catalog(&self) -> ExpectationBuilder<Vec<Ingredient>> {
        let script = self.script.clone();
        ExpectationBuilder::new(move |reply| lock(&script).catalog.push_back(reply))
    }

    /// Expects an order submission.
    pub fn expect_submit(&self) -> ExpectationBuilder<OrderCode> {
        let script = self.script.clone();
        ExpectationBuilder::new(move |reply| lock(&script).submits.push_back(reply))
    }

    /// Expects a lookup of `code`.
    pub fn expect_lookup(&self, code: impl Into<OrderCode>) -> ExpectationBuilder<StoredOrder> {
        let script = self.script.clone();
        let code = code.into();
        ExpectationBuilder::new(move |reply| {
            lock(&script)
                .lookups
                .push_back(LookupExpectation { code, reply })
        })
    }

    /// Every submission received so far, in arrival order.
    pub fn submissions(&self) -> Vec<OrderSubmission> {
        lock(&self.script).received_submissions.clone()
    }

    /// Every code looked up so far, in arrival order.
    pub fn lookups(&self) -> Vec<OrderCode> {
        lock(&self.script).received_lookups.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.script).remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T> {
    push: Box<dyn FnOnce(Reply<T>) + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(push: impl FnOnce(Reply<T>) + Send + 'static) -> Self {
        Self {
            push: Box::new(push),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        (self.push)(Reply::Ready(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: BoundaryError) {
        (self.push)(Reply::Ready(Err(error)));
    }

    /// Leaves the call suspended until the returned sender is used.
    /// Dropping the sender resolves the call with [`BoundaryError::Closed`].
    pub fn deferred(self) -> oneshot::Sender<Outcome<T>> {
        let (sender, receiver) = oneshot::channel();
        (self.push)(Reply::Deferred(receiver));
        sender
    }
}

#[async_trait]
impl CatalogSource for MockBoundary {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, BoundaryError> {
        let reply = lock(&self.script).catalog.pop_front();
        match reply {
            Some(reply) => reply.resolve().await,
            None => panic!("Unexpected catalog fetch"),
        }
    }
}

#[async_trait]
impl OrderBoundary for MockBoundary {
    async fn submit_order(&self, submission: &OrderSubmission) -> Result<OrderCode, BoundaryError> {
        let reply = {
            let mut script = lock(&self.script);
            script.received_submissions.push(submission.clone());
            script.submits.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve().await,
            None => panic!("Unexpected order submission"),
        }
    }

    async fn lookup_order(&self, code: &OrderCode) -> Result<StoredOrder, BoundaryError> {
        let expectation = {
            let mut script = lock(&self.script);
            script.received_lookups.push(code.clone());
            script.lookups.pop_front()
        };
        match expectation {
            Some(expectation) => {
                assert_eq!(&expectation.code, code, "Lookup for unexpected code");
                expectation.reply.resolve().await
            }
            None => panic!("Unexpected lookup of {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_script_order() {
        let mock = MockBoundary::new();
        mock.expect_submit().return_err(BoundaryError::Status(500));
        mock.expect_submit().return_ok(OrderCode::new("AB12"));

        let submission = OrderSubmission {
            customer: Default::default(),
            pizzas: vec![],
        };
        assert_eq!(
            mock.submit_order(&submission).await,
            Err(BoundaryError::Status(500))
        );
        assert_eq!(
            mock.submit_order(&submission).await,
            Ok(OrderCode::new("AB12"))
        );
        assert_eq!(mock.submissions().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    async fn deferred_reply_waits_for_release() {
        let mock = Arc::new(MockBoundary::new());
        let release = mock.expect_catalog().deferred();

        let fetch = tokio::spawn({
            let mock = mock.clone();
            async move { mock.fetch_ingredients().await }
        });
        tokio::task::yield_now().await;
        assert!(!fetch.is_finished());

        release
            .send(Ok(vec![Ingredient::new("Corn", "images/corn.png")]))
            .unwrap();
        let ingredients = fetch.await.unwrap().unwrap();
        assert_eq!(ingredients[0].name, "Corn");
    }

    #[tokio::test]
    async fn dropped_release_resolves_as_closed() {
        let mock = MockBoundary::new();
        drop(mock.expect_lookup("X1").deferred());
        assert_eq!(
            mock.lookup_order(&OrderCode::new("X1")).await,
            Err(BoundaryError::Closed)
        );
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_flags_unused_expectations() {
        let mock = MockBoundary::new();
        mock.expect_lookup("X1").return_err(BoundaryError::NotFound);
        mock.verify();
    }
}
