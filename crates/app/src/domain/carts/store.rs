//! Session cart store.

use freshline::carts::{Cart, actions::CartDispatch, reducer::CartAction};
use tracing::debug;

/// Owner of the cart for one session.
///
/// Every mutation goes through [`CartDispatch`], so the cart actions from
/// [`freshline::carts::actions::CartActions`] work on the store directly.
#[derive(Debug, Default)]
pub struct CartStore {
    cart: Cart,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

impl CartDispatch for CartStore {
    fn dispatch(&mut self, action: CartAction) {
        debug!(?action, "dispatching cart action");

        self.cart.dispatch(action);

        debug!(
            lines = self.cart.len(),
            items = self.cart.item_count(),
            total = %self.cart.total(),
            "cart updated"
        );
    }
}
