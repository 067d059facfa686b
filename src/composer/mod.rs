//! # Pizza Composer
//!
//! The composer owns the *working set*: the ingredient selection for a pizza
//! that has not been committed yet. The working set may be invalid (fewer
//! than [`MIN_INGREDIENTS`]) for as long as the customer is still choosing.
//!
//! ## Pricing
//!
//! The running [`price`](PizzaComposer::price) moves by the per-ingredient
//! surcharge on every add/remove so it can be displayed live. It is a display
//! aid only: [`commit`](PizzaComposer::commit) recomputes the price from the
//! ingredient count, and that recomputed value is what ends up in the cart.
//!
//! ## Usage
//!
//! ```rust
//! use pizza_order::catalog::Catalog;
//! use pizza_order::composer::PizzaComposer;
//! use pizza_order::model::{Ingredient, Money};
//!
//! let catalog = Catalog::new(vec![
//!     Ingredient::new("Cheese", "images/cheese.png"),
//!     Ingredient::new("Corn", "images/corn.png"),
//! ]);
//! let mut composer = PizzaComposer::new(catalog);
//! composer.add_ingredient("Cheese").unwrap();
//! composer.add_ingredient("Corn").unwrap();
//!
//! let pizza = composer.commit().unwrap();
//! assert_eq!(pizza.price(), Money::from_units(14));
//! ```

pub mod error;

pub use error::*;

use crate::catalog::Catalog;
use crate::model::{Money, Pizza, PricingRule, MIN_INGREDIENTS};
use tracing::debug;

/// Builds one pizza's ingredient selection.
#[derive(Debug, Clone)]
pub struct PizzaComposer {
    catalog: Catalog,
    pricing: PricingRule,
    selected: Vec<String>,
    price: Money,
}

impl PizzaComposer {
    /// An empty working set priced by [`PricingRule::STANDARD`].
    pub fn new(catalog: Catalog) -> Self {
        Self::with_pricing(catalog, PricingRule::STANDARD)
    }

    pub fn with_pricing(catalog: Catalog, pricing: PricingRule) -> Self {
        Self {
            catalog,
            pricing,
            selected: Vec::new(),
            price: pricing.base,
        }
    }

    /// A working set seeded with an existing pizza's ingredients, for editing.
    pub fn seeded(catalog: Catalog, pizza: &Pizza) -> Self {
        let mut composer = Self::new(catalog);
        composer.selected = pizza.ingredients().to_vec();
        composer.price = composer.pricing.price_for(composer.selected.len());
        composer
    }

    /// Adds `name` to the selection and returns the new running price.
    ///
    /// A failed call leaves the selection untouched.
    pub fn add_ingredient(&mut self, name: &str) -> Result<Money, ComposerError> {
        if !self.catalog.contains(name) {
            return Err(ComposerError::UnknownIngredient(name.to_string()));
        }
        if self.is_selected(name) {
            return Err(ComposerError::DuplicateIngredient(name.to_string()));
        }
        self.selected.push(name.to_string());
        self.price = self.price + self.pricing.per_ingredient;
        debug!(ingredient = name, count = self.selected.len(), "Ingredient added");
        Ok(self.price)
    }

    /// Removes `name` if selected. Returns whether anything was removed;
    /// absence is not an error.
    pub fn remove_ingredient(&mut self, name: &str) -> bool {
        let Some(position) = self.selected.iter().position(|n| n == name) else {
            return false;
        };
        self.selected.remove(position);
        self.price = self.price - self.pricing.per_ingredient;
        debug!(ingredient = name, count = self.selected.len(), "Ingredient removed");
        true
    }

    /// Finalizes the selection into a pizza, priced from the ingredient count.
    pub fn commit(&self) -> Result<Pizza, ComposerError> {
        if self.selected.len() < MIN_INGREDIENTS {
            return Err(ComposerError::InsufficientIngredients {
                count: self.selected.len(),
            });
        }
        Ok(Pizza::priced(self.selected.clone(), &self.pricing))
    }

    /// Discards the selection.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.price = self.pricing.base;
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|n| n == name)
    }

    /// Selected ingredient names in insertion order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Running price of the working set.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
