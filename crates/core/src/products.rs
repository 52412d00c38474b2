//! Products

use rust_decimal::Decimal;

use crate::{ids::TypedId, pricing::PricingMode, suppliers::SupplierRef};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product as listed in the catalog.
///
/// Pricing fields are raw: use the resolvers in [`crate::pricing`] to find the
/// effective pricing mode and listed price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Catalog category (e.g. "produce", "dairy")
    pub category: String,

    /// Image URL
    pub image: Option<String>,

    /// Base price per kg
    pub price: Decimal,

    /// Weight of one batch in kg
    pub batch_weight_kg: Option<Decimal>,

    /// Price of one batch
    pub batch_price: Option<Decimal>,

    /// Explicit pricing mode, overriding detection from the batch fields
    pub pricing_mode: Option<PricingMode>,

    /// Selling supplier
    pub supplier: SupplierRef,

    /// Whether the supplier currently has stock
    pub in_stock: bool,
}
