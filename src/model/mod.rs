//! Pure data structures shared by every component, plus their wire shapes.

pub mod customer;
pub mod ingredient;
pub mod money;
pub mod order;
pub mod pizza;

pub use customer::*;
pub use ingredient::*;
pub use money::*;
pub use order::*;
pub use pizza::*;
