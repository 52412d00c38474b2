//! Product Fixtures

use freshline::{
    pricing::PricingMode,
    products::Product,
    suppliers::{Supplier, SupplierId},
};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::fixtures::{FixtureError, lookup_supplier, parse_amount};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Product fixtures, in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Catalog category
    pub category: String,

    /// Image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Base price per kg (e.g. "3.20")
    pub price: String,

    /// Weight of one batch in kg
    #[serde(default)]
    pub batch_weight_kg: Option<String>,

    /// Price of one batch
    #[serde(default)]
    pub batch_price: Option<String>,

    /// Explicit pricing mode
    #[serde(default)]
    pub pricing_mode: Option<PricingMode>,

    /// Supplier id
    pub supplier: String,

    /// Stock flag, defaults to in stock
    #[serde(default = "in_stock_default")]
    pub in_stock: bool,
}

fn in_stock_default() -> bool {
    true
}

impl ProductFixture {
    /// Resolve into a catalog product.
    ///
    /// # Errors
    ///
    /// Returns an error if a price is malformed or the supplier is unknown.
    pub fn into_product(
        self,
        suppliers: &FxHashMap<SupplierId, &Supplier>,
    ) -> Result<Product, FixtureError> {
        let supplier = lookup_supplier(suppliers, &self.supplier)?;

        Ok(Product {
            id: self.id.into(),
            name: self.name,
            category: self.category,
            image: self.image,
            price: parse_amount(&self.price)?,
            batch_weight_kg: self.batch_weight_kg.as_deref().map(parse_amount).transpose()?,
            batch_price: self.batch_price.as_deref().map(parse_amount).transpose()?,
            pricing_mode: self.pricing_mode,
            supplier: supplier.to_ref(),
            in_stock: self.in_stock,
        })
    }
}
