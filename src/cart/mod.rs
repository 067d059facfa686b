//! # Cart
//!
//! Ordered list of committed pizzas. The total is never cached: every call to
//! [`Cart::total`] sums the current entries, so it cannot drift from them.
//!
//! Positions are zero-based in the API. [`Cart::entries`] pairs each pizza
//! with its 1-based display number.

pub mod edit;
pub mod error;

pub use edit::CartEdit;
pub use error::*;

use crate::catalog::Catalog;
use crate::model::{Money, Pizza};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    pizzas: Vec<Pizza>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed pizza.
    pub fn add(&mut self, pizza: Pizza) -> Result<(), CartError> {
        if !pizza.has_minimum_ingredients() {
            return Err(CartError::InsufficientIngredients {
                count: pizza.ingredients().len(),
            });
        }
        info!(price = %pizza.price(), position = self.pizzas.len() + 1, "Pizza added to cart");
        self.pizzas.push(pizza);
        Ok(())
    }

    /// Removes and returns the pizza at `index`. Later entries shift down.
    pub fn remove_at(&mut self, index: usize) -> Result<Pizza, CartError> {
        self.check(index)?;
        let pizza = self.pizzas.remove(index);
        info!(index, remaining = self.pizzas.len(), "Pizza removed from cart");
        Ok(pizza)
    }

    /// Replaces the pizza at `index`, returning the old one.
    pub fn replace_at(&mut self, index: usize, pizza: Pizza) -> Result<Pizza, CartError> {
        self.check(index)?;
        if !pizza.has_minimum_ingredients() {
            return Err(CartError::InsufficientIngredients {
                count: pizza.ingredients().len(),
            });
        }
        debug!(index, "Replacing cart entry");
        Ok(std::mem::replace(&mut self.pizzas[index], pizza))
    }

    /// Starts editing the pizza at `index`.
    pub fn begin_edit(&self, index: usize, catalog: Catalog) -> Result<CartEdit, CartError> {
        self.check(index)?;
        Ok(CartEdit::new(index, catalog, &self.pizzas[index]))
    }

    /// Sum of all entry prices.
    pub fn total(&self) -> Money {
        self.pizzas.iter().map(Pizza::price).sum()
    }

    pub fn clear(&mut self) {
        self.pizzas.clear();
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    /// Pizzas paired with their 1-based display position.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Pizza)> {
        self.pizzas.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), CartError> {
        if index < self.pizzas.len() {
            Ok(())
        } else {
            Err(CartError::IndexOutOfRange {
                index,
                len: self.pizzas.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::PizzaComposer;
    use crate::model::Ingredient;

    fn catalog() -> Catalog {
        Catalog::new(
            ["Sauce", "Cheese", "Corn", "Mushrooms", "Peppers", "Onions"]
                .into_iter()
                .map(|n| Ingredient::new(n, format!("images/{}.png", n.to_lowercase())))
                .collect(),
        )
    }

    fn pizza(names: &[&str]) -> Pizza {
        let mut composer = PizzaComposer::new(catalog());
        for name in names {
            composer.add_ingredient(name).unwrap();
        }
        composer.commit().unwrap()
    }

    #[test]
    fn total_follows_every_change() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), Money::ZERO);

        cart.add(pizza(&["Cheese", "Corn"])).unwrap();
        cart.add(pizza(&["Cheese", "Corn", "Onions", "Sauce"])).unwrap();
        assert_eq!(cart.total(), Money::from_units(32));

        let removed = cart.remove_at(0).unwrap();
        assert_eq!(removed.price(), Money::from_units(14));
        assert_eq!(cart.total(), Money::from_units(18));
        assert_eq!(cart.pizzas()[0].ingredients().len(), 4);
    }

    #[test]
    fn out_of_range_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(pizza(&["Cheese", "Corn"])).unwrap();
        let before = cart.clone();

        assert_eq!(
            cart.remove_at(1),
            Err(CartError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            cart.replace_at(5, pizza(&["Sauce", "Onions"])).unwrap_err(),
            CartError::IndexOutOfRange { index: 5, len: 1 }
        );
        assert!(matches!(
            cart.begin_edit(1, catalog()),
            Err(CartError::IndexOutOfRange { .. })
        ));
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_on_empty_cart_fails() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.remove_at(0),
            Err(CartError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn entries_are_numbered_from_one() {
        let mut cart = Cart::new();
        cart.add(pizza(&["Cheese", "Corn"])).unwrap();
        cart.add(pizza(&["Sauce", "Onions"])).unwrap();
        let numbers: Vec<usize> = cart.entries().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn edit_save_replaces_in_place() {
        let mut cart = Cart::new();
        cart.add(pizza(&["Cheese", "Corn"])).unwrap();
        cart.add(pizza(&["Sauce", "Onions"])).unwrap();

        let mut edit = cart.begin_edit(0, catalog()).unwrap();
        edit.composer_mut().add_ingredient("Mushrooms").unwrap();
        let saved = edit.save(&mut cart).unwrap();

        assert_eq!(saved.price(), Money::from_units(16));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.pizzas()[0].ingredients(), ["Cheese", "Corn", "Mushrooms"]);
        assert_eq!(cart.pizzas()[1].ingredients(), ["Sauce", "Onions"]);
        assert_eq!(cart.total(), Money::from_units(30));
    }

    #[test]
    fn edit_below_minimum_is_refused() {
        let mut cart = Cart::new();
        cart.add(pizza(&["Cheese", "Corn"])).unwrap();
        let before = cart.clone();

        let mut edit = cart.begin_edit(0, catalog()).unwrap();
        edit.composer_mut().remove_ingredient("Corn");
        assert_eq!(
            edit.save(&mut cart),
            Err(CartError::InsufficientIngredients { count: 1 })
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn cancelled_edit_changes_nothing() {
        let mut cart = Cart::new();
        cart.add(pizza(&["Cheese", "Corn"])).unwrap();
        let before = cart.clone();

        let mut edit = cart.begin_edit(0, catalog()).unwrap();
        edit.composer_mut().add_ingredient("Onions").unwrap();
        drop(edit);

        assert_eq!(cart, before);
    }
}
