//! Order Items

use rust_decimal::Decimal;

use crate::{
    carts::items::{CartLineItem, PurchaseMode},
    money::round_money,
    pricing::{PricingMode, QuantityUnit, effective_unit_price},
    products::ProductId,
};

/// A line on a fulfillment.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Product id
    pub product_id: ProductId,

    /// Product name at the time of ordering
    pub product_name: String,

    /// Unit the quantity is counted in
    pub unit: QuantityUnit,

    /// Ordered quantity
    pub quantity: u32,

    /// Pricing mode at the time of ordering
    pub pricing_mode: PricingMode,

    /// Purchase mode
    pub purchase_mode: PurchaseMode,

    /// Catalog price of one unit
    pub listed_unit_price: Decimal,

    /// Buyer's proposed unit price
    pub offered_unit_price: Option<Decimal>,
}

impl OrderItem {
    /// Price charged per unit.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        effective_unit_price(
            self.purchase_mode,
            self.listed_unit_price,
            self.offered_unit_price,
        )
    }

    /// `unit_price × quantity`, rounded to 2 dp. Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        round_money(self.unit_price().saturating_mul(Decimal::from(self.quantity)))
    }
}

impl From<&CartLineItem> for OrderItem {
    fn from(item: &CartLineItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            product_name: item.product.name.clone(),
            unit: item.product.unit,
            quantity: item.quantity,
            pricing_mode: item.pricing_mode,
            purchase_mode: item.purchase_mode,
            listed_unit_price: item.listed_unit_price,
            offered_unit_price: item.offered_unit_price,
        }
    }
}
