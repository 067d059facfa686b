use crate::model::{CustomerDetails, Money, Pizza};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-issued order code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderCode(String);

impl OrderCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for OrderCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Display for OrderCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body sent to the backend when placing an order.
///
/// Customer fields sit at the top level next to `pizzas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    #[serde(flatten)]
    pub customer: CustomerDetails,
    pub pizzas: Vec<Pizza>,
}

/// An order as the backend stores it and returns it from a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredOrder {
    pub code: OrderCode,
    #[serde(flatten)]
    pub customer: CustomerDetails,
    pub pizzas: Vec<Pizza>,
}

/// Immutable result of a confirmed submission or of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    code: OrderCode,
    pizzas: Vec<Pizza>,
    total_price: Money,
    customer: CustomerDetails,
}

impl OrderRecord {
    /// Record for a just-confirmed order. `total_price` was computed from the
    /// cart at submission time and is kept as-is.
    pub(crate) fn confirmed(code: OrderCode, submission: OrderSubmission, total_price: Money) -> Self {
        Self {
            code,
            pizzas: submission.pizzas,
            total_price,
            customer: submission.customer,
        }
    }

    pub fn code(&self) -> &OrderCode {
        &self.code
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    /// Pizzas paired with their 1-based display position.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Pizza)> {
        self.pizzas.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }
}

/// Lookup results are rebuilt entirely from server data; the total is the
/// sum of the returned pizza prices.
impl From<StoredOrder> for OrderRecord {
    fn from(stored: StoredOrder) -> Self {
        let total_price = stored.pizzas.iter().map(Pizza::price).sum();
        Self {
            code: stored.code,
            pizzas: stored.pizzas,
            total_price,
            customer: stored.customer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submission_flattens_customer_fields() {
        let submission = OrderSubmission {
            customer: CustomerDetails {
                first_name: "Alice".into(),
                ..Default::default()
            },
            pizzas: vec![],
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["firstName"], "Alice");
        assert!(value["address"].is_object());
        assert_eq!(value["pizzas"], json!([]));
        assert!(value.get("customer").is_none());
    }

    #[test]
    fn lookup_record_resums_returned_pizzas() {
        let stored: StoredOrder = serde_json::from_value(json!({
            "code": "ZZ-1",
            "firstName": "Bob",
            "lastName": "Stone",
            "address": { "street": "Elm", "houseNumber": "4", "city": "Rome" },
            "phoneNumber": "0123456789",
            "pizzas": [
                { "ingredients": ["Cheese", "Corn"], "price": 14.0 },
                { "ingredients": ["Cheese", "Corn", "Onions", "Sauce"], "price": 18.0 }
            ]
        }))
        .unwrap();

        let record = OrderRecord::from(stored);
        assert_eq!(record.code().as_str(), "ZZ-1");
        assert_eq!(record.customer().address.city, "Rome");
        assert_eq!(record.total_price(), Money::from_units(32));
        let positions: Vec<usize> = record.entries().map(|(n, _)| n).collect();
        assert_eq!(positions, vec![1, 2]);
    }
}
