use super::store::Record;
use crate::model::{OrderCode, OrderSubmission, StoredOrder};

/// Server-side acceptance rules. These are the authoritative checks; the
/// client runs the same ones only to give early feedback.
impl Record for StoredOrder {
    type Id = OrderCode;
    type Draft = OrderSubmission;

    fn from_draft(code: OrderCode, draft: OrderSubmission) -> Self {
        StoredOrder {
            code,
            customer: draft.customer,
            pizzas: draft.pizzas,
        }
    }

    fn on_create(&self) -> Result<(), String> {
        if self.pizzas.is_empty() {
            return Err("order has no pizzas".into());
        }
        if let Some(position) = self.pizzas.iter().position(|p| !p.has_minimum_ingredients()) {
            return Err(format!("pizza {} has too few ingredients", position + 1));
        }
        self.customer.validate().map_err(|e| e.to_string())
    }
}
