//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the whole ordering flow.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate,
//! providing hierarchical spans that follow an order from the build view to the backend.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix (`with_target(false)`).
//! This keeps log lines short while still providing rich structured data.
//!
//! - **Structured logging** with `tracing` crate
//! - **Hierarchical spans** for request tracing
//! - **Configurable log levels** via `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## What Gets Traced
//!
//! - **Catalog**: load attempts, retries and the final outcome
//! - **Cart**: pizzas added, removed and edited (with positions and prices)
//! - **Submission**: start, confirmation (with the order code) or failure
//! - **Lookup**: hits, misses with their reason, and superseded results
//! - **Backend Store**: startup, creates, rejects and shutdown
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=pizza_order::backend=debug cargo run
//! ```
//!
//! ## Debug Flag for Full Payload
//!
//! Payloads are logged **once**, at `debug`, when they enter a component:
//!
//! ```rust,ignore
//! debug!(?pending, "Submission started");
//! ```
//!
//! The `?` syntax records the value using its `Debug` representation as a
//! structured field. Everything at `info` stays short.
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Store started record_type="StoredOrder"
//! INFO Catalog loaded count=6 attempt=1
//! INFO Pizza added to cart price=14$ position=1
//! INFO submit_order: Submitting order ticket=1 pizzas=1 total=14$
//! INFO submit_order:submit_order: Created record_type="StoredOrder" id=3f0c... size=1
//! INFO submit_order: Order confirmed code=3f0c... total=14$
//! ```
//!
//! Nested spans show which call a line belongs to:
//! `submit_order:submit_order` is the backend's span inside the session's.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - fields carry the context
        .compact() // Compact format shows spans inline (e.g., "submit_order:submit_order")
        .init();
}
