//! Cart Line Items

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    money::{fixed_2dp, round_money},
    pricing::{
        PricingMode, QuantityUnit, effective_unit_price, resolve_listed_unit_price,
        resolve_pricing_mode, resolve_quantity_unit,
    },
    products::{Product, ProductId},
    suppliers::SupplierRef,
};

/// How the buyer intends to pay for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurchaseMode {
    /// Buy at the listed price
    Direct,

    /// Propose a unit price to the supplier
    Offer,
}

impl PurchaseMode {
    /// Wire name used in line-item keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PurchaseMode::Direct => "direct",
            PurchaseMode::Offer => "offer",
        }
    }
}

/// Identity of a cart line.
///
/// Two lines with the same key are the same line: `productId::pricingMode::purchaseMode`,
/// followed by `::<offer price>` (2 dp) for offer lines with a price set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemKey(String);

impl LineItemKey {
    /// Compute the key for a line.
    #[must_use]
    pub fn new(
        product_id: &ProductId,
        pricing_mode: PricingMode,
        purchase_mode: PurchaseMode,
        offered_unit_price: Option<Decimal>,
    ) -> Self {
        let base = format!(
            "{product_id}::{}::{}",
            pricing_mode.as_str(),
            purchase_mode.as_str()
        );

        match (purchase_mode, offered_unit_price) {
            (PurchaseMode::Offer, Some(offered)) => Self(format!("{base}::{}", fixed_2dp(offered))),
            _ => Self(base),
        }
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LineItemKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// The product a line refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemProduct {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Image URL
    pub image: Option<String>,

    /// Unit quantities are counted in
    pub unit: QuantityUnit,
}

/// A line in the cart.
///
/// `unit_price` and `total_price` are stored, and re-derived on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    /// Identity key
    pub id: LineItemKey,

    /// Product reference
    pub product: LineItemProduct,

    /// Quantity, never below 1
    pub quantity: u32,

    /// Pricing mode the line was added under
    pub pricing_mode: PricingMode,

    /// Purchase mode
    pub purchase_mode: PurchaseMode,

    /// Catalog price of one unit
    pub listed_unit_price: Decimal,

    /// Price proposed by the buyer, rounded to 2 dp
    pub offered_unit_price: Option<Decimal>,

    /// Price charged per unit
    pub unit_price: Decimal,

    /// `unit_price × quantity`, rounded to 2 dp
    pub total_price: Decimal,

    /// Selling supplier
    pub supplier: SupplierRef,

    /// When the line was first added
    pub created_at: Timestamp,
}

impl CartLineItem {
    /// The key this line should be stored under given its current fields.
    #[must_use]
    pub fn key(&self) -> LineItemKey {
        LineItemKey::new(
            &self.product.id,
            self.pricing_mode,
            self.purchase_mode,
            self.offered_unit_price,
        )
    }

    /// Re-derive the stored unit and total prices.
    ///
    /// Returns `None`, leaving the prices untouched, if the total overflows.
    pub(crate) fn reprice(&mut self) -> Option<()> {
        let unit_price = effective_unit_price(
            self.purchase_mode,
            self.listed_unit_price,
            self.offered_unit_price,
        );
        let total_price = unit_price.checked_mul(Decimal::from(self.quantity))?;

        self.unit_price = unit_price;
        self.total_price = round_money(total_price);

        Some(())
    }
}

/// Payload for adding a line to the cart.
///
/// Only constructible through [`NewLineItem::direct`] and [`NewLineItem::offer`],
/// so an offer always carries its price and a direct add never does.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    product: LineItemProduct,
    quantity: u32,
    pricing_mode: PricingMode,
    purchase_mode: PurchaseMode,
    listed_unit_price: Decimal,
    offered_unit_price: Option<Decimal>,
    supplier: SupplierRef,
    added_at: Timestamp,
}

impl NewLineItem {
    /// A direct purchase at the product's listed price.
    #[must_use]
    pub fn direct(product: &Product, quantity: u32, added_at: Timestamp) -> Self {
        Self::from_product(product, quantity, PurchaseMode::Direct, None, added_at)
    }

    /// An offer at the given unit price.
    #[must_use]
    pub fn offer(
        product: &Product,
        quantity: u32,
        offered_unit_price: Decimal,
        added_at: Timestamp,
    ) -> Self {
        Self::from_product(
            product,
            quantity,
            PurchaseMode::Offer,
            Some(round_money(offered_unit_price)),
            added_at,
        )
    }

    fn from_product(
        product: &Product,
        quantity: u32,
        purchase_mode: PurchaseMode,
        offered_unit_price: Option<Decimal>,
        added_at: Timestamp,
    ) -> Self {
        Self {
            product: LineItemProduct {
                id: product.id.clone(),
                name: product.name.clone(),
                image: product.image.clone(),
                unit: resolve_quantity_unit(product),
            },
            quantity,
            pricing_mode: resolve_pricing_mode(product),
            purchase_mode,
            listed_unit_price: resolve_listed_unit_price(product),
            offered_unit_price,
            supplier: product.supplier.clone(),
            added_at,
        }
    }

    /// Quantity being added.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The key the new line will be stored under.
    #[must_use]
    pub fn key(&self) -> LineItemKey {
        LineItemKey::new(
            &self.product.id,
            self.pricing_mode,
            self.purchase_mode,
            self.offered_unit_price,
        )
    }

    /// Fold this payload into an existing line with the same key.
    ///
    /// Quantities add up; the incoming pricing fields win. Returns `None` if
    /// the merged quantity or total overflows.
    pub(crate) fn merge_into(self, existing: &mut CartLineItem) -> Option<()> {
        existing.quantity = existing.quantity.checked_add(self.quantity)?;
        existing.listed_unit_price = self.listed_unit_price;
        existing.offered_unit_price = self.offered_unit_price;
        existing.reprice()
    }

    /// Build a fresh cart line, or `None` if its total overflows.
    pub(crate) fn into_line_item(self) -> Option<CartLineItem> {
        let id = self.key();

        let mut item = CartLineItem {
            id,
            product: self.product,
            quantity: self.quantity,
            pricing_mode: self.pricing_mode,
            purchase_mode: self.purchase_mode,
            listed_unit_price: self.listed_unit_price,
            offered_unit_price: self.offered_unit_price,
            unit_price: Decimal::ZERO,
            total_price: Decimal::ZERO,
            supplier: self.supplier,
            created_at: self.added_at,
        };

        item.reprice()?;

        Some(item)
    }
}
