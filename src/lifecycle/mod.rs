//! Runtime orchestration and lifecycle management.
//!
//! - [`PizzaSystem`] - picks the backend, starts the store actor, opens sessions
//!   and shuts everything down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod pizza_system;
pub mod tracing;

pub use pizza_system::*;
pub use self::tracing::*;
