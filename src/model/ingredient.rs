use serde::{Deserialize, Serialize};

/// A purchasable topping as listed by the catalog.
///
/// Pizzas refer to ingredients by `name` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Opaque display handle, typically a relative image path.
    pub image: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}
