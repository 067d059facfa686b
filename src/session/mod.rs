//! # Session
//!
//! One customer's state, owned in one place and handed out by reference
//! rather than kept in globals. A [`Session`] is a cheap `Clone` handle; all
//! clones see the same state.
//!
//! | Field | Written by | Read by |
//! |-------|------------|---------|
//! | catalog status | [`open`](Session::open), [`reload_catalog`](Session::reload_catalog) | composer, edit flow, display |
//! | working set | `add_ingredient` / `remove_ingredient`, reset by `add_to_cart` | build view |
//! | cart | `add_to_cart`, `remove_pizza`, `save_edit` (not while submitting), cleared on confirmation | cart view, submitter |
//! | active edit | `begin_edit` .. `save_edit` / `cancel_edit` | edit view |
//! | submit state, last order | `submit_order` | confirmation view |
//! | last lookup | `lookup_order` (newest call only) | lookup view |
//! | saved customer | read at open, written after a confirmed order | order form |
//!
//! Only two operations suspend: `submit_order` and `lookup_order`. Neither
//! holds the state lock across the network call, so the session stays usable
//! while they are in flight. The cart is the exception: it stays frozen
//! from the start of a submission until its answer arrives.

pub mod prefs;

pub use prefs::*;

use crate::boundary::{CatalogSource, OrderBoundary};
use crate::cart::{Cart, CartEdit, CartError};
use crate::catalog::{self, Catalog, CatalogError, CatalogStatus, RetryPolicy};
use crate::composer::{ComposerError, PizzaComposer};
use crate::lookup::{LookupError, LookupTracker, OrderLookup};
use crate::model::{CustomerDetails, Money, OrderCode, OrderRecord, Pizza};
use crate::submitter::{OrderSubmitter, SubmitError, SubmitState};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

struct SessionState {
    catalog: CatalogStatus,
    composer: PizzaComposer,
    cart: Cart,
    edit: Option<CartEdit>,
    submitter: OrderSubmitter,
    last_order: Option<OrderRecord>,
    last_lookup: Option<Result<OrderRecord, LookupError>>,
    saved_customer: SavedCustomer,
}

impl SessionState {
    fn current_catalog(&self) -> Catalog {
        self.catalog.catalog().cloned().unwrap_or_default()
    }

    /// A confirmation clears the cart, so it must still hold exactly what
    /// was sent.
    fn check_cart_unlocked(&self) -> Result<(), CartError> {
        if self.submitter.is_submitting() {
            warn!("Cart change rejected: submission in flight");
            return Err(CartError::SubmissionInProgress);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
    orders: Arc<dyn OrderBoundary>,
    catalog_source: Arc<dyn CatalogSource>,
    prefs: Arc<dyn CustomerStore>,
    lookup: OrderLookup,
    lookups: Arc<LookupTracker>,
    retry: RetryPolicy,
}

impl Session {
    /// Starts a session: loads the catalog and the saved customer details.
    ///
    /// Neither failure is fatal. A failed catalog leaves the session in
    /// [`CatalogStatus::Failed`] until [`reload_catalog`](Self::reload_catalog)
    /// succeeds; unreadable customer details start the form empty.
    pub async fn open(
        orders: Arc<dyn OrderBoundary>,
        catalog_source: Arc<dyn CatalogSource>,
        prefs: Arc<dyn CustomerStore>,
        retry: RetryPolicy,
    ) -> Self {
        let saved_customer = prefs.load().await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not read saved customer details");
            SavedCustomer::default()
        });
        let session = Self {
            state: Arc::new(Mutex::new(SessionState {
                catalog: CatalogStatus::Loading,
                composer: PizzaComposer::new(Catalog::default()),
                cart: Cart::new(),
                edit: None,
                submitter: OrderSubmitter::new(),
                last_order: None,
                last_lookup: None,
                saved_customer,
            })),
            lookup: OrderLookup::new(orders.clone()),
            orders,
            catalog_source,
            prefs,
            lookups: Arc::new(LookupTracker::new()),
            retry,
        };
        // The status already records a failure.
        let _ = session.reload_catalog().await;
        session
    }

    // --- Catalog ---

    /// Fetches the catalog again. The working set keeps every selected
    /// ingredient the new catalog still lists.
    pub async fn reload_catalog(&self) -> Result<Catalog, CatalogError> {
        let loaded = catalog::load(self.catalog_source.as_ref(), self.retry).await;
        let mut state = self.state.lock().await;
        match loaded {
            Ok(catalog) => {
                let kept = state.composer.selected().to_vec();
                state.composer = PizzaComposer::new(catalog.clone());
                for name in &kept {
                    if state.composer.add_ingredient(name).is_err() {
                        warn!(ingredient = %name, "Dropped from working set after reload");
                    }
                }
                state.catalog = CatalogStatus::Ready(catalog.clone());
                Ok(catalog)
            }
            Err(e) => {
                state.catalog = CatalogStatus::Failed(e.clone());
                Err(e)
            }
        }
    }

    pub async fn catalog_status(&self) -> CatalogStatus {
        self.state.lock().await.catalog.clone()
    }

    // --- Build flow ---

    pub async fn add_ingredient(&self, name: &str) -> Result<Money, ComposerError> {
        self.state.lock().await.composer.add_ingredient(name)
    }

    pub async fn remove_ingredient(&self, name: &str) -> bool {
        self.state.lock().await.composer.remove_ingredient(name)
    }

    /// Ingredients currently selected in the build view and their running price.
    pub async fn working_set(&self) -> (Vec<String>, Money) {
        let state = self.state.lock().await;
        (state.composer.selected().to_vec(), state.composer.price())
    }

    /// Commits the working set into the cart and starts a fresh one.
    pub async fn add_to_cart(&self) -> Result<Pizza, CartError> {
        let mut state = self.state.lock().await;
        state.check_cart_unlocked()?;
        let pizza = state.composer.commit()?;
        state.cart.add(pizza.clone())?;
        state.composer.reset();
        Ok(pizza)
    }

    // --- Cart ---

    pub async fn cart(&self) -> Cart {
        self.state.lock().await.cart.clone()
    }

    pub async fn remove_pizza(&self, index: usize) -> Result<Pizza, CartError> {
        let mut state = self.state.lock().await;
        state.check_cart_unlocked()?;
        let removed = state.cart.remove_at(index)?;
        // Positions shifted; an edit in progress no longer points at its pizza.
        if state.edit.take().is_some() {
            info!("Edit cancelled by cart removal");
        }
        Ok(removed)
    }

    /// Starts editing the pizza at `index`, replacing any edit in progress.
    pub async fn begin_edit(&self, index: usize) -> Result<(), CartError> {
        let mut state = self.state.lock().await;
        let catalog = state.current_catalog();
        let edit = state.cart.begin_edit(index, catalog)?;
        state.edit = Some(edit);
        Ok(())
    }

    pub async fn edit_add_ingredient(&self, name: &str) -> Result<Money, CartError> {
        let mut state = self.state.lock().await;
        let edit = state.edit.as_mut().ok_or(CartError::NoActiveEdit)?;
        Ok(edit.composer_mut().add_ingredient(name)?)
    }

    pub async fn edit_remove_ingredient(&self, name: &str) -> Result<bool, CartError> {
        let mut state = self.state.lock().await;
        let edit = state.edit.as_mut().ok_or(CartError::NoActiveEdit)?;
        Ok(edit.composer_mut().remove_ingredient(name))
    }

    pub async fn editing(&self) -> Option<CartEdit> {
        self.state.lock().await.edit.clone()
    }

    /// Writes the edit back into the cart. A refused save keeps the edit open.
    pub async fn save_edit(&self) -> Result<Pizza, CartError> {
        let mut state = self.state.lock().await;
        state.check_cart_unlocked()?;
        let SessionState { edit, cart, .. } = &mut *state;
        let pizza = edit.as_ref().ok_or(CartError::NoActiveEdit)?.save(cart)?;
        *edit = None;
        Ok(pizza)
    }

    /// Drops the edit in progress. Returns whether there was one.
    pub async fn cancel_edit(&self) -> bool {
        self.state.lock().await.edit.take().is_some()
    }

    // --- Submission ---

    /// Places the order for the current cart.
    ///
    /// At most one submission runs at a time; a call made while another is
    /// in flight fails with [`SubmitError::AlreadyInProgress`] and changes
    /// nothing.
    #[instrument(skip(self, customer))]
    pub async fn submit_order(&self, customer: &CustomerDetails) -> Result<OrderRecord, SubmitError> {
        let pending = {
            let mut state = self.state.lock().await;
            let SessionState { submitter, cart, .. } = &mut *state;
            submitter.begin(cart, customer)?
        };

        let outcome = self.orders.submit_order(pending.submission()).await;

        let record = {
            let mut state = self.state.lock().await;
            let SessionState {
                submitter,
                cart,
                last_order,
                saved_customer,
                ..
            } = &mut *state;
            let record = submitter.complete(pending, outcome, cart)?;
            *last_order = Some(record.clone());
            *saved_customer = SavedCustomer::from(customer);
            record
        };

        if let Err(e) = self.prefs.save(&SavedCustomer::from(customer)).await {
            warn!(error = %e, "Could not persist customer details");
        }
        Ok(record)
    }

    pub async fn submit_state(&self) -> SubmitState {
        self.state.lock().await.submitter.state().clone()
    }

    pub async fn last_order(&self) -> Option<OrderRecord> {
        self.state.lock().await.last_order.clone()
    }

    /// Customer details to prefill the order form with.
    pub async fn saved_customer(&self) -> CustomerDetails {
        self.state.lock().await.saved_customer.prefill()
    }

    // --- Lookup ---

    /// Looks an order up by code. The result is returned to the caller and,
    /// unless a newer lookup has started meanwhile, shown as the last lookup.
    pub async fn lookup_order(&self, code: &OrderCode) -> Result<OrderRecord, LookupError> {
        let token = self.lookups.start();
        let result = self.lookup.lookup(code).await;
        // Checked under the lock so a newer result cannot land in between.
        let mut state = self.state.lock().await;
        if self.lookups.is_current(token) {
            state.last_lookup = Some(result.clone());
        } else {
            info!(%code, "Superseded lookup result discarded");
        }
        result
    }

    pub async fn last_lookup(&self) -> Option<Result<OrderRecord, LookupError>> {
        self.state.lock().await.last_lookup.clone()
    }
}
