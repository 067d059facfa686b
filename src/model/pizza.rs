use crate::model::{Money, PricingRule};
use serde::{Deserialize, Serialize};

/// Fewest ingredients a pizza may carry once it leaves the composer.
pub const MIN_INGREDIENTS: usize = 2;

/// A composed pizza.
///
/// Values are produced by [`PizzaComposer::commit`](crate::composer::PizzaComposer::commit)
/// (or decoded from the backend) and never mutated afterwards; editing a cart
/// entry replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    ingredients: Vec<String>,
    price: Money,
}

impl Pizza {
    /// Builds a pizza priced by `rule`. Callers are responsible for the
    /// minimum-ingredient and no-duplicates rules.
    pub(crate) fn priced(ingredients: Vec<String>, rule: &PricingRule) -> Self {
        let price = rule.price_for(ingredients.len());
        Self { ingredients, price }
    }

    /// Ingredient names in the order they were added.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn has_minimum_ingredients(&self) -> bool {
        self.ingredients.len() >= MIN_INGREDIENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_matches_backend() {
        let pizza = Pizza::priced(
            vec!["Cheese".to_string(), "Corn".to_string()],
            &PricingRule::STANDARD,
        );
        let json = serde_json::to_value(&pizza).unwrap();
        assert_eq!(json["ingredients"], serde_json::json!(["Cheese", "Corn"]));
        assert_eq!(json["price"].as_f64(), Some(14.0));
    }
}
