//! Checkout

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{carts::items::CartLineItem, orders::items::OrderItem, suppliers::SupplierRef};

/// Order items destined for one supplier.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierGroup {
    /// Fulfilling supplier
    pub supplier: SupplierRef,

    /// Lines for that supplier, in cart order
    pub items: Vec<OrderItem>,
}

/// Split cart lines into one group per supplier.
///
/// Groups appear in the order their supplier first appears in the cart.
#[must_use]
pub fn split_by_supplier(lines: &[CartLineItem]) -> SmallVec<[SupplierGroup; 4]> {
    let mut groups: SmallVec<[SupplierGroup; 4]> = SmallVec::new();
    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();

    for line in lines {
        let item = OrderItem::from(line);

        match positions
            .get(line.supplier.id.as_str())
            .and_then(|&position| groups.get_mut(position))
        {
            Some(group) => group.items.push(item),
            None => {
                positions.insert(line.supplier.id.as_str(), groups.len());
                groups.push(SupplierGroup {
                    supplier: line.supplier.clone(),
                    items: vec![item],
                });
            }
        }
    }

    groups
}
