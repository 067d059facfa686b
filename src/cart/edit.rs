use super::{Cart, CartError};
use crate::catalog::Catalog;
use crate::composer::PizzaComposer;
use crate::model::Pizza;
use tracing::info;

/// An in-progress edit of one cart entry.
///
/// The edit works on its own copy of the pizza's ingredients. Nothing reaches
/// the cart until [`save`](CartEdit::save) succeeds; dropping the edit is a
/// cancel.
#[derive(Debug, Clone)]
pub struct CartEdit {
    index: usize,
    composer: PizzaComposer,
}

impl CartEdit {
    pub(super) fn new(index: usize, catalog: Catalog, pizza: &Pizza) -> Self {
        Self {
            index,
            composer: PizzaComposer::seeded(catalog, pizza),
        }
    }

    /// Zero-based cart position being edited.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn composer(&self) -> &PizzaComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut PizzaComposer {
        &mut self.composer
    }

    /// Commits the edited selection and replaces the entry in `cart`.
    ///
    /// On error the cart is unchanged and the edit can be continued.
    pub fn save(&self, cart: &mut Cart) -> Result<Pizza, CartError> {
        let pizza = self.composer.commit()?;
        cart.replace_at(self.index, pizza.clone())?;
        info!(index = self.index, price = %pizza.price(), "Cart entry edited");
        Ok(pizza)
    }
}
