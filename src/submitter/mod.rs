//! # Order Submitter
//!
//! A two-step state machine around the one network call that places an
//! order:
//!
//! ```text
//!        begin()                 complete(Ok(code))
//! Idle ───────────▶ Submitting ─────────────────────▶ Confirmed
//!  ▲                    │
//!  │                    │ complete(Err(..))
//!  │                    ▼
//!  └─────(retry)──── Failed
//! ```
//!
//! [`OrderSubmitter::begin`] checks the preconditions, moves to `Submitting`
//! and hands back a [`PendingSubmission`] carrying the request. The caller
//! performs the boundary call however it likes and feeds the result to
//! [`OrderSubmitter::complete`]. Keeping the await outside the state machine
//! means the machine itself never suspends, and a second `begin` while the
//! first is still out fails with [`SubmitError::AlreadyInProgress`].
//!
//! Each attempt carries a ticket; a completion whose ticket does not match
//! the attempt in flight is refused, so a late reply can never confirm the
//! wrong submission.

pub mod error;

pub use error::*;

use crate::boundary::BoundaryError;
use crate::cart::Cart;
use crate::model::{CustomerDetails, Money, OrderCode, OrderRecord, OrderSubmission};
use tracing::{debug, info, warn};

/// Where the current submission attempt stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting {
        ticket: u64,
    },
    Confirmed(OrderRecord),
    Failed {
        message: String,
    },
}

/// The request for one submission attempt, produced by [`OrderSubmitter::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    ticket: u64,
    submission: OrderSubmission,
    total_price: Money,
}

impl PendingSubmission {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Snapshot of the customer details and cart taken at `begin`.
    pub fn submission(&self) -> &OrderSubmission {
        &self.submission
    }

    /// Cart total at `begin`; becomes the record's total on success.
    pub fn total_price(&self) -> Money {
        self.total_price
    }
}

#[derive(Debug, Default)]
pub struct OrderSubmitter {
    state: SubmitState,
    next_ticket: u64,
}

impl OrderSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    /// Enters `Submitting` if the cart and customer allow it.
    ///
    /// A rejected call leaves the state (and the cart) as it was.
    pub fn begin(
        &mut self,
        cart: &Cart,
        customer: &CustomerDetails,
    ) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            warn!("Submission rejected: another is in flight");
            return Err(SubmitError::AlreadyInProgress);
        }
        if cart.is_empty() {
            return Err(SubmitError::EmptyCart);
        }
        customer.validate()?;

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let pending = PendingSubmission {
            ticket,
            submission: OrderSubmission {
                customer: customer.clone(),
                pizzas: cart.pizzas().to_vec(),
            },
            total_price: cart.total(),
        };
        debug!(?pending, "Submission started");
        info!(ticket, pizzas = cart.len(), total = %pending.total_price, "Submitting order");
        self.state = SubmitState::Submitting { ticket };
        Ok(pending)
    }

    /// Delivers the boundary's answer for `pending`.
    ///
    /// On success the cart is cleared and the confirmed record returned. On
    /// failure the cart is untouched and the failure message is kept in the
    /// state for display.
    pub fn complete(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<OrderCode, BoundaryError>,
        cart: &mut Cart,
    ) -> Result<OrderRecord, SubmitError> {
        if self.state != (SubmitState::Submitting { ticket: pending.ticket }) {
            warn!(ticket = pending.ticket, "Discarding stale submission result");
            return Err(SubmitError::StaleCompletion);
        }
        match outcome {
            Ok(code) => {
                let record = OrderRecord::confirmed(code, pending.submission, pending.total_price);
                cart.clear();
                info!(code = %record.code(), total = %record.total_price(), "Order confirmed");
                self.state = SubmitState::Confirmed(record.clone());
                Ok(record)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "Order submission failed");
                self.state = SubmitState::Failed {
                    message: message.clone(),
                };
                Err(SubmitError::SubmissionFailed(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::composer::PizzaComposer;
    use crate::model::{Address, Ingredient, ValidationError};

    fn cart_with(sets: &[&[&str]]) -> Cart {
        let catalog = Catalog::new(
            ["Sauce", "Cheese", "Corn", "Mushrooms", "Onions"]
                .into_iter()
                .map(|n| Ingredient::new(n, format!("images/{}.png", n.to_lowercase())))
                .collect(),
        );
        let mut cart = Cart::new();
        for names in sets {
            let mut composer = PizzaComposer::new(catalog.clone());
            for name in *names {
                composer.add_ingredient(name).unwrap();
            }
            cart.add(composer.commit().unwrap()).unwrap();
        }
        cart
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            address: Address {
                street: "Main Street".into(),
                house_number: "12".into(),
                city: "Springfield".into(),
            },
            phone_number: "0123456789".into(),
        }
    }

    #[test]
    fn success_confirms_and_clears_cart() {
        let mut cart = cart_with(&[&["Cheese", "Corn"]]);
        let mut submitter = OrderSubmitter::new();

        let pending = submitter.begin(&cart, &customer()).unwrap();
        assert!(submitter.is_submitting());
        assert_eq!(pending.submission().pizzas.len(), 1);

        let record = submitter
            .complete(pending, Ok(OrderCode::new("AB12")), &mut cart)
            .unwrap();
        assert_eq!(record.code().as_str(), "AB12");
        assert_eq!(record.total_price(), Money::from_units(14));
        assert_eq!(record.customer(), &customer());
        assert!(cart.is_empty());
        assert_eq!(submitter.state(), &SubmitState::Confirmed(record));
    }

    #[test]
    fn second_begin_while_submitting_is_rejected() {
        let cart = cart_with(&[&["Cheese", "Corn"]]);
        let before = cart.clone();
        let mut submitter = OrderSubmitter::new();

        let pending = submitter.begin(&cart, &customer()).unwrap();
        assert_eq!(
            submitter.begin(&cart, &customer()),
            Err(SubmitError::AlreadyInProgress)
        );
        assert_eq!(cart, before);
        assert_eq!(
            submitter.state(),
            &SubmitState::Submitting {
                ticket: pending.ticket()
            }
        );
    }

    #[test]
    fn failure_keeps_cart_and_allows_retry() {
        let mut cart = cart_with(&[&["Cheese", "Corn"], &["Sauce", "Onions", "Corn"]]);
        let before = cart.clone();
        let mut submitter = OrderSubmitter::new();

        let pending = submitter.begin(&cart, &customer()).unwrap();
        let err = submitter
            .complete(pending, Err(BoundaryError::Status(500)), &mut cart)
            .unwrap_err();
        assert!(matches!(err, SubmitError::SubmissionFailed(_)));
        assert_eq!(cart, before);
        assert!(matches!(submitter.state(), SubmitState::Failed { .. }));

        let retry = submitter.begin(&cart, &customer()).unwrap();
        assert_eq!(retry.total_price(), Money::from_units(30));
        let record = submitter
            .complete(retry, Ok(OrderCode::new("R2")), &mut cart)
            .unwrap();
        assert_eq!(record.pizzas().len(), 2);
    }

    #[test]
    fn preconditions_are_checked() {
        let mut submitter = OrderSubmitter::new();
        assert_eq!(
            submitter.begin(&Cart::new(), &customer()),
            Err(SubmitError::EmptyCart)
        );

        let mut bad = customer();
        bad.phone_number = "12345".into();
        assert_eq!(
            submitter.begin(&cart_with(&[&["Cheese", "Corn"]]), &bad),
            Err(SubmitError::InvalidCustomer(ValidationError::BadPhoneNumber))
        );
        assert_eq!(submitter.state(), &SubmitState::Idle);
    }

    #[test]
    fn stale_completion_is_refused() {
        let mut cart = cart_with(&[&["Cheese", "Corn"]]);
        let mut submitter = OrderSubmitter::new();

        let first = submitter.begin(&cart, &customer()).unwrap();
        submitter
            .complete(first.clone(), Err(BoundaryError::Closed), &mut cart)
            .unwrap_err();
        let _second = submitter.begin(&cart, &customer()).unwrap();

        assert_eq!(
            submitter.complete(first, Ok(OrderCode::new("LATE")), &mut cart),
            Err(SubmitError::StaleCompletion)
        );
        assert_eq!(cart.len(), 1);
        assert!(submitter.is_submitting());
    }
}
