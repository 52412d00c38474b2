//! Cart Reducer
//!
//! `reduce` is a pure function from a cart and an action to the next cart.
//! Actions targeting a line that no longer exists, or whose prices would
//! overflow, leave the cart unchanged.

use rust_decimal::Decimal;

use crate::{
    carts::{
        Cart,
        items::{CartLineItem, LineItemKey, NewLineItem, PurchaseMode},
    },
    money::round_money,
};

/// A cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a line, merging into an existing line with the same key.
    AddItem(NewLineItem),

    /// Remove a line.
    RemoveItem(LineItemKey),

    /// Set a line's quantity; zero or less removes it.
    UpdateQuantity {
        /// Target line
        id: LineItemKey,
        /// New quantity
        quantity: i64,
    },

    /// Move a line between direct purchase and offer.
    SwitchPurchaseMode {
        /// Target line
        id: LineItemKey,
        /// Destination purchase mode
        purchase_mode: PurchaseMode,
        /// Offer price to use when switching to an offer
        offered_unit_price: Option<Decimal>,
    },

    /// Change the offer price of an offer line.
    SetOfferUnitPrice {
        /// Target line
        id: LineItemKey,
        /// New offer price
        offered_unit_price: Decimal,
    },

    /// Empty the cart.
    Clear,

    /// Replace every line, e.g. when hydrating a saved cart.
    ReplaceItems(Vec<CartLineItem>),
}

/// Apply one action to a cart.
#[must_use]
pub fn reduce(cart: Cart, action: CartAction) -> Cart {
    let next = match action {
        CartAction::AddItem(item) => add_item(&cart, item),
        CartAction::RemoveItem(id) => remove_item(&cart, &id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(&cart, &id, quantity),
        CartAction::SwitchPurchaseMode {
            id,
            purchase_mode,
            offered_unit_price,
        } => switch_purchase_mode(&cart, &id, purchase_mode, offered_unit_price),
        CartAction::SetOfferUnitPrice {
            id,
            offered_unit_price,
        } => set_offer_unit_price(&cart, &id, offered_unit_price),
        CartAction::Clear => Some(Cart::empty()),
        CartAction::ReplaceItems(items) => replace_items(items),
    };

    next.unwrap_or(cart)
}

fn add_item(cart: &Cart, item: NewLineItem) -> Option<Cart> {
    if item.quantity() == 0 {
        return None;
    }

    let key = item.key();
    let mut items = cart.items().to_vec();

    match items.iter_mut().find(|existing| existing.id == key) {
        Some(existing) => item.merge_into(existing)?,
        None => items.push(item.into_line_item()?),
    }

    Cart::from_items(items)
}

fn remove_item(cart: &Cart, id: &LineItemKey) -> Option<Cart> {
    cart.get(id)?;

    let items = cart
        .items()
        .iter()
        .filter(|item| &item.id != id)
        .cloned()
        .collect();

    Cart::from_items(items)
}

fn update_quantity(cart: &Cart, id: &LineItemKey, quantity: i64) -> Option<Cart> {
    if quantity <= 0 {
        return remove_item(cart, id);
    }

    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    let mut items = cart.items().to_vec();
    let item = items.iter_mut().find(|item| &item.id == id)?;

    item.quantity = quantity;
    item.reprice()?;

    Cart::from_items(items)
}

fn switch_purchase_mode(
    cart: &Cart,
    id: &LineItemKey,
    purchase_mode: PurchaseMode,
    offered_unit_price: Option<Decimal>,
) -> Option<Cart> {
    rekey(cart, id, |item| {
        item.purchase_mode = purchase_mode;
        item.offered_unit_price = match purchase_mode {
            PurchaseMode::Offer => offered_unit_price.map(round_money),
            PurchaseMode::Direct => None,
        };

        true
    })
}

fn set_offer_unit_price(
    cart: &Cart,
    id: &LineItemKey,
    offered_unit_price: Decimal,
) -> Option<Cart> {
    rekey(cart, id, |item| {
        if item.purchase_mode != PurchaseMode::Offer {
            return false;
        }

        item.offered_unit_price = Some(round_money(offered_unit_price));

        true
    })
}

/// Rebuild a cart from outside lines.
///
/// Lines are normalised the way the other actions would have left them:
/// empty lines are dropped, offer prices rounded, keys recomputed, and lines
/// sharing a key folded together.
fn replace_items(items: Vec<CartLineItem>) -> Option<Cart> {
    let mut lines: Vec<CartLineItem> = Vec::with_capacity(items.len());

    for mut item in items {
        if item.quantity == 0 {
            continue;
        }

        item.offered_unit_price = match item.purchase_mode {
            PurchaseMode::Offer => item.offered_unit_price.map(round_money),
            PurchaseMode::Direct => None,
        };
        item.id = item.key();

        match lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => fold_into(line, item)?,
            None => {
                item.reprice()?;
                lines.push(item);
            }
        }
    }

    Cart::from_items(lines)
}

/// Edit a line in a way that may change its key, then merge or replace.
///
/// `edit` returns `false` to reject the change. When another line already
/// holds the new key, the edited line folds into it. Otherwise the edited
/// line takes its old position under the new key.
fn rekey(
    cart: &Cart,
    id: &LineItemKey,
    edit: impl FnOnce(&mut CartLineItem) -> bool,
) -> Option<Cart> {
    let position = cart.items().iter().position(|item| &item.id == id)?;

    let mut items = cart.items().to_vec();
    let mut moved = items.remove(position);

    if !edit(&mut moved) {
        return None;
    }

    moved.id = moved.key();

    match items.iter_mut().find(|item| item.id == moved.id) {
        Some(target) => fold_into(target, moved)?,
        None => {
            moved.reprice()?;
            items.insert(position, moved);
        }
    }

    Cart::from_items(items)
}

/// Merge `line` into `target`, which shares its key.
///
/// Quantities add up and `line`'s pricing wins; `target` keeps its position
/// and creation time.
fn fold_into(target: &mut CartLineItem, line: CartLineItem) -> Option<()> {
    target.quantity = target.quantity.checked_add(line.quantity)?;
    target.purchase_mode = line.purchase_mode;
    target.listed_unit_price = line.listed_unit_price;
    target.offered_unit_price = line.offered_unit_price;
    target.reprice()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::{
        pricing::PricingMode,
        products::{Product, ProductId},
        suppliers::SupplierRef,
    };

    use super::*;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: "produce".to_string(),
            image: None,
            price,
            batch_weight_kg: None,
            batch_price: None,
            pricing_mode: None,
            supplier: SupplierRef {
                id: "s1".into(),
                name: "Supplier One".to_string(),
            },
            in_stock: true,
        }
    }

    fn add(cart: Cart, item: NewLineItem) -> Cart {
        reduce(cart, CartAction::AddItem(item))
    }

    fn missing_key() -> LineItemKey {
        LineItemKey::new(
            &"missing".into(),
            PricingMode::PerKg,
            PurchaseMode::Direct,
            None,
        )
    }

    fn key(cart: &Cart, index: usize) -> LineItemKey {
        cart.items()
            .get(index)
            .map_or_else(missing_key, |item| item.id.clone())
    }

    #[test]
    fn adding_a_new_line_derives_prices() {
        let p = product("p1", Decimal::new(250, 2));

        let cart = add(Cart::empty(), NewLineItem::direct(&p, 4, Timestamp::UNIX_EPOCH));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Decimal::from(10));
        assert_eq!(cart.item_count(), 4);
        assert_eq!(key(&cart, 0).as_str(), "p1::perKg::direct");
    }

    #[test]
    fn adding_zero_quantity_is_ignored() {
        let p = product("p1", Decimal::from(3));

        let cart = add(Cart::empty(), NewLineItem::direct(&p, 0, Timestamp::UNIX_EPOCH));

        assert!(cart.is_empty());
    }

    #[test]
    fn adding_the_same_key_merges_with_latest_pricing() {
        let first = product("p1", Decimal::from(3));
        let repriced = product("p1", Decimal::from(4));

        let cart = add(Cart::empty(), NewLineItem::direct(&first, 2, Timestamp::UNIX_EPOCH));
        let cart = add(cart, NewLineItem::direct(&repriced, 3, Timestamp::UNIX_EPOCH));

        let item = cart.items().first();

        assert_eq!(cart.len(), 1);
        assert_eq!(item.map(|item| item.quantity), Some(5));
        assert_eq!(item.map(|item| item.unit_price), Some(Decimal::from(4)));
        assert_eq!(cart.total(), Decimal::from(20));
    }

    #[test]
    fn offers_at_different_prices_stay_separate() {
        let p = product("p1", Decimal::from(10));

        let cart = add(
            Cart::empty(),
            NewLineItem::offer(&p, 1, Decimal::from(8), Timestamp::UNIX_EPOCH),
        );
        let cart = add(cart, NewLineItem::offer(&p, 1, Decimal::from(9), Timestamp::UNIX_EPOCH));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Decimal::from(17));
    }

    #[test]
    fn offer_price_is_rounded_before_keying() {
        let p = product("p1", Decimal::from(10));

        let cart = add(
            Cart::empty(),
            NewLineItem::offer(&p, 1, Decimal::new(8_004, 3), Timestamp::UNIX_EPOCH),
        );
        let cart = add(
            cart,
            NewLineItem::offer(&p, 2, Decimal::new(8_001, 3), Timestamp::UNIX_EPOCH),
        );

        assert_eq!(cart.len(), 1);
        assert_eq!(key(&cart, 0).as_str(), "p1::perKg::offer::8.00");
        assert_eq!(cart.total(), Decimal::from(24));
    }

    #[test]
    fn remove_missing_line_returns_the_same_cart() {
        let p = product("p1", Decimal::from(3));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 1, Timestamp::UNIX_EPOCH));

        let next = reduce(cart.clone(), CartAction::RemoveItem(missing_key()));

        assert_eq!(next, cart);
    }

    #[test]
    fn update_quantity_reprices_the_line() {
        let p = product("p1", Decimal::new(150, 2));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 1, Timestamp::UNIX_EPOCH));
        let id = key(&cart, 0);

        let cart = reduce(cart, CartAction::UpdateQuantity { id, quantity: 3 });

        assert_eq!(cart.total(), Decimal::new(450, 2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn update_quantity_to_negative_removes_the_line() {
        let p = product("p1", Decimal::from(3));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 2, Timestamp::UNIX_EPOCH));
        let id = key(&cart, 0);

        let cart = reduce(cart, CartAction::UpdateQuantity { id, quantity: -4 });

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn switching_to_offer_without_collision_rekeys_in_place() {
        let a = product("a", Decimal::from(2));
        let b = product("b", Decimal::from(5));
        let cart = add(Cart::empty(), NewLineItem::direct(&a, 1, Timestamp::UNIX_EPOCH));
        let cart = add(cart, NewLineItem::direct(&b, 2, Timestamp::UNIX_EPOCH));
        let id = key(&cart, 0);

        let cart = reduce(
            cart,
            CartAction::SwitchPurchaseMode {
                id,
                purchase_mode: PurchaseMode::Offer,
                offered_unit_price: Some(Decimal::new(175, 2)),
            },
        );

        assert_eq!(cart.len(), 2);
        assert_eq!(key(&cart, 0).as_str(), "a::perKg::offer::1.75");
        assert_eq!(cart.total(), Decimal::new(1175, 2));
    }

    #[test]
    fn switching_back_to_direct_clears_the_offer() {
        let p = product("p1", Decimal::from(10));
        let cart = add(
            Cart::empty(),
            NewLineItem::offer(&p, 2, Decimal::from(7), Timestamp::UNIX_EPOCH),
        );
        let id = key(&cart, 0);

        let cart = reduce(
            cart,
            CartAction::SwitchPurchaseMode {
                id,
                purchase_mode: PurchaseMode::Direct,
                offered_unit_price: Some(Decimal::from(7)),
            },
        );

        let item = cart.items().first();

        assert_eq!(item.and_then(|item| item.offered_unit_price), None);
        assert_eq!(cart.total(), Decimal::from(20));
    }

    #[test]
    fn set_offer_price_on_direct_line_is_ignored() {
        let p = product("p1", Decimal::from(10));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 1, Timestamp::UNIX_EPOCH));
        let id = key(&cart, 0);

        let next = reduce(
            cart.clone(),
            CartAction::SetOfferUnitPrice {
                id,
                offered_unit_price: Decimal::from(5),
            },
        );

        assert_eq!(next, cart);
    }

    #[test]
    fn set_offer_price_merges_into_matching_offer() {
        let p = product("p1", Decimal::from(10));
        let cart = add(
            Cart::empty(),
            NewLineItem::offer(&p, 2, Decimal::from(8), Timestamp::UNIX_EPOCH),
        );
        let cart = add(cart, NewLineItem::offer(&p, 3, Decimal::from(9), Timestamp::UNIX_EPOCH));
        let nine = key(&cart, 1);

        let cart = reduce(
            cart,
            CartAction::SetOfferUnitPrice {
                id: nine,
                offered_unit_price: Decimal::from(8),
            },
        );

        assert_eq!(cart.len(), 1);
        assert_eq!(key(&cart, 0).as_str(), "p1::perKg::offer::8.00");
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Decimal::from(40));
    }

    #[test]
    fn replace_items_rederives_prices_and_aggregates() {
        let p = product("p1", Decimal::from(3));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 2, Timestamp::UNIX_EPOCH));

        let mut items = cart.items().to_vec();
        if let Some(item) = items.first_mut() {
            item.quantity = 5;
            item.total_price = Decimal::ZERO;
        }

        let cart = reduce(Cart::empty(), CartAction::ReplaceItems(items));

        assert_eq!(cart.total(), Decimal::from(15));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn replace_items_drops_empty_lines() {
        let p = product("p1", Decimal::from(3));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 2, Timestamp::UNIX_EPOCH));

        let line = cart.items().to_vec();
        let mut empty = line.clone();
        if let Some(item) = empty.first_mut() {
            item.quantity = 0;
        }

        let cart = reduce(
            Cart::empty(),
            CartAction::ReplaceItems([line, empty].concat()),
        );

        let quantities: Vec<u32> = cart.items().iter().map(|item| item.quantity).collect();

        assert_eq!(quantities, vec![2]);
        assert_eq!(cart.total(), Decimal::from(6));
    }

    #[test]
    fn replace_items_rekeys_and_merges_duplicates() {
        let p = product("p1", Decimal::from(3));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 2, Timestamp::UNIX_EPOCH));

        let mut items = cart.items().to_vec();
        let mut stale = items.clone();
        if let Some(item) = stale.first_mut() {
            item.id = missing_key();
            item.quantity = 3;
        }
        items.append(&mut stale);

        let cart = reduce(Cart::empty(), CartAction::ReplaceItems(items));

        assert_eq!(cart.len(), 1);
        assert_eq!(key(&cart, 0).as_str(), "p1::perKg::direct");
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Decimal::from(15));

        let id = key(&cart, 0);
        let cart = reduce(cart, CartAction::RemoveItem(id));

        assert!(cart.is_empty());
    }

    #[test]
    fn replace_items_rounds_offer_prices() {
        let p = product("p1", Decimal::from(10));
        let cart = add(
            Cart::empty(),
            NewLineItem::offer(&p, 2, Decimal::from(8), Timestamp::UNIX_EPOCH),
        );

        let mut items = cart.items().to_vec();
        if let Some(item) = items.first_mut() {
            item.offered_unit_price = Some(Decimal::new(7_996, 3));
        }

        let cart = reduce(Cart::empty(), CartAction::ReplaceItems(items));

        assert_eq!(key(&cart, 0).as_str(), "p1::perKg::offer::8.00");
        assert_eq!(cart.total(), Decimal::from(16));
    }

    #[test]
    fn overflowing_add_leaves_the_cart_unchanged() {
        let p = product("p1", Decimal::from(3));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 1, Timestamp::UNIX_EPOCH));

        let next = add(
            cart.clone(),
            NewLineItem::offer(&p, u32::MAX, Decimal::MAX, Timestamp::UNIX_EPOCH),
        );

        assert_eq!(next, cart);
    }

    #[test]
    fn overflowing_quantity_update_leaves_the_cart_unchanged() {
        let p = product("p1", Decimal::MAX);
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 1, Timestamp::UNIX_EPOCH));
        let id = key(&cart, 0);

        let next = reduce(cart.clone(), CartAction::UpdateQuantity { id, quantity: 2 });

        assert_eq!(next, cart);
        assert_eq!(next.total(), Decimal::MAX);
    }

    #[test]
    fn overflowing_cart_total_leaves_the_cart_unchanged() {
        let a = product("a", Decimal::MAX);
        let b = product("b", Decimal::MAX);
        let cart = add(Cart::empty(), NewLineItem::direct(&a, 1, Timestamp::UNIX_EPOCH));

        let next = add(cart.clone(), NewLineItem::direct(&b, 1, Timestamp::UNIX_EPOCH));

        assert_eq!(next, cart);
    }

    #[test]
    fn clear_empties_the_cart() {
        let p = product("p1", Decimal::from(3));
        let cart = add(Cart::empty(), NewLineItem::direct(&p, 2, Timestamp::UNIX_EPOCH));

        assert_eq!(reduce(cart, CartAction::Clear), Cart::empty());
    }
}
