//! Cart Actions
//!
//! Intention-revealing cart operations over [`CartAction`] dispatch.

use std::mem;

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    carts::{
        Cart,
        items::{LineItemKey, NewLineItem, PurchaseMode},
        reducer::{CartAction, reduce},
    },
    products::Product,
};

/// Anything that accepts cart actions.
pub trait CartDispatch {
    /// Apply an action.
    fn dispatch(&mut self, action: CartAction);
}

impl CartDispatch for Cart {
    fn dispatch(&mut self, action: CartAction) {
        *self = reduce(mem::take(self), action);
    }
}

/// Named cart operations.
///
/// Each fixes the purchase-mode discriminant so callers cannot build an offer
/// without a price or a direct purchase with one.
pub trait CartActions: CartDispatch {
    /// Add a product at its listed price.
    fn add_direct_line_item(&mut self, product: &Product, quantity: u32) {
        self.dispatch(CartAction::AddItem(NewLineItem::direct(
            product,
            quantity,
            Timestamp::now(),
        )));
    }

    /// Add a product at a proposed unit price.
    fn add_offer_line_item(
        &mut self,
        product: &Product,
        quantity: u32,
        offered_unit_price: Decimal,
    ) {
        self.dispatch(CartAction::AddItem(NewLineItem::offer(
            product,
            quantity,
            offered_unit_price,
            Timestamp::now(),
        )));
    }

    /// Turn a line into a direct purchase.
    fn switch_line_item_to_direct(&mut self, id: &LineItemKey) {
        self.dispatch(CartAction::SwitchPurchaseMode {
            id: id.clone(),
            purchase_mode: PurchaseMode::Direct,
            offered_unit_price: None,
        });
    }

    /// Turn a line into an offer at the given unit price.
    fn switch_line_item_to_offer(&mut self, id: &LineItemKey, offered_unit_price: Decimal) {
        self.dispatch(CartAction::SwitchPurchaseMode {
            id: id.clone(),
            purchase_mode: PurchaseMode::Offer,
            offered_unit_price: Some(offered_unit_price),
        });
    }

    /// Change the unit price of an offer line.
    fn update_offer_price(&mut self, id: &LineItemKey, offered_unit_price: Decimal) {
        self.dispatch(CartAction::SetOfferUnitPrice {
            id: id.clone(),
            offered_unit_price,
        });
    }

    /// Remove a line.
    fn remove_line_item(&mut self, id: &LineItemKey) {
        self.dispatch(CartAction::RemoveItem(id.clone()));
    }

    /// Set a line's quantity; zero or less removes it.
    fn update_line_item_quantity(&mut self, id: &LineItemKey, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.clone(),
            quantity,
        });
    }

    /// Empty the cart.
    fn clear_cart(&mut self) {
        self.dispatch(CartAction::Clear);
    }
}

impl<T: CartDispatch + ?Sized> CartActions for T {}
