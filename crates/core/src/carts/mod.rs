//! Carts

use rust_decimal::Decimal;

use crate::carts::items::{CartLineItem, LineItemKey};

pub mod actions;
pub mod items;
pub mod reducer;

/// The buyer's cart.
///
/// `total` and `item_count` are pure functions of `items` and are recomputed
/// in full after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
    total: Decimal,
    item_count: u64,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a cart from a list of lines, deriving the aggregates.
    ///
    /// Returns `None` if the total overflows.
    #[must_use]
    pub fn from_items(items: Vec<CartLineItem>) -> Option<Self> {
        let total = items
            .iter()
            .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.total_price))?;
        let item_count = items.iter().map(|item| u64::from(item.quantity)).sum();

        Some(Self {
            items,
            total,
            item_count,
        })
    }

    /// Lines in the cart. Order carries no meaning.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Find a line by key.
    #[must_use]
    pub fn get(&self, id: &LineItemKey) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Sum of line totals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of line quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
