//! # Pizza Order
//!
//! > **Compose pizzas, fill a cart, place an order, look it up later.**
//!
//! This crate holds the ordering core of a pizza shop: the rules for how a
//! pizza's ingredients and price evolve, how pizzas collect into a cart, and
//! how a cart turns into a submitted order that is either confirmed with a
//! server-issued code or fails and can be retried.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure state machines, async edges
//! The composer, cart and submitter are plain synchronous values. Only two
//! things ever wait on the network (submitting and looking up an order) and
//! both go through the traits in [`boundary`]. The submitter is split into
//! `begin` and `complete` so the await happens *between* two state
//! transitions, never inside one.
//!
//! ### Session-scoped state
//! Everything one customer touches lives in a [`Session`](session::Session),
//! passed around explicitly. Nothing is global.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each component defines its own error type (e.g., `ComposerError`, `CartError`)
//! with `thiserror`. Rejected operations leave state untouched, so every error
//! is recoverable in place.
//!
//! ### 2. Prices Are Derived
//! A pizza costs `10 + 2 * ingredients` ([`PricingRule::STANDARD`](model::PricingRule::STANDARD)),
//! recomputed at commit. The cart total is summed on every call and never cached.
//!
//! ### 3. Concurrency Model
//! A session may have one submission in flight; a second is refused with
//! `AlreadyInProgress`. Lookups may overlap, and only the newest result is
//! kept for display. The in-process backend is a single actor task that
//! processes requests one at a time.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured logging.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`composer`], [`cart`], [`submitter`], [`lookup`])
//! - **Role**: The order-composition state machine.
//! - **Key items**: [`PizzaComposer`](composer::PizzaComposer), [`Cart`](cart::Cart),
//!   [`OrderSubmitter`](submitter::OrderSubmitter), [`OrderLookup`](lookup::OrderLookup).
//!
//! ### 2. The Data ([`model`], [`catalog`])
//! - **Role**: Pizzas, customers, orders, money, and the ingredient list.
//!
//! ### 3. The Interface ([`boundary`], [`backend`])
//! - **Role**: Everything outside the process. `boundary` defines the traits plus
//!   the REST client and a scripted mock; `backend` is an in-process stand-in
//!   built on a record-store actor.
//!
//! ### 4. The Orchestrator ([`session`], [`lifecycle`], [`config`])
//! - **Role**: Wires backends into sessions, loads configuration, starts and
//!   stops the store actor.
//! - **Key items**: [`Session`](session::Session), [`PizzaSystem`](lifecycle::PizzaSystem).
//!
//! ## 🚀 Quick Start
//!
//! ```rust,no_run
//! use pizza_order::lifecycle::PizzaSystem;
//! use pizza_order::model::{Address, CustomerDetails};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = PizzaSystem::in_memory();
//!     let session = system.open_session().await;
//!
//!     session.add_ingredient("Cheese").await?;
//!     session.add_ingredient("Corn").await?;
//!     session.add_to_cart().await?;
//!
//!     let customer = CustomerDetails {
//!         first_name: "Alice".into(),
//!         last_name: "Smith".into(),
//!         address: Address {
//!             street: "Main Street".into(),
//!             house_number: "12".into(),
//!             city: "Springfield".into(),
//!         },
//!         phone_number: "0123456789".into(),
//!     };
//!     let record = session.submit_order(&customer).await?;
//!     println!("Order {} costs {}", record.code(), record.total_price());
//!
//!     drop(session);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod backend;
pub mod boundary;
pub mod cart;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod lifecycle;
pub mod lookup;
pub mod model;
pub mod session;
pub mod submitter;
