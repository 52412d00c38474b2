//! Fixtures
//!
//! Mock catalog, supplier and order data, embedded in the binary as YAML.

use std::str::FromStr;

use freshline::{
    orders::parent::ParentOrderRecord,
    products::{Product, ProductId},
    suppliers::{Supplier, SupplierId},
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::fixtures::{
    orders::OrdersFixture, products::ProductsFixture, suppliers::SuppliersFixture,
};

pub mod orders;
pub mod products;
pub mod suppliers;

const SUPPLIERS_YAML: &str = include_str!("../../fixtures/suppliers.yaml");
const PRODUCTS_YAML: &str = include_str!("../../fixtures/products.yaml");
const ORDERS_YAML: &str = include_str!("../../fixtures/orders.yaml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Invalid RFC 3339 timestamp
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Reference to a supplier that is not in the fixture
    #[error("Unknown supplier: {0}")]
    UnknownSupplier(String),

    /// Reference to a product that is not in the fixture
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

/// The full mock data set, resolved into domain types.
#[derive(Debug, Clone)]
pub struct Fixtures {
    /// Suppliers, in fixture order
    pub suppliers: Vec<Supplier>,

    /// Products, in fixture order
    pub products: Vec<Product>,

    /// Seed orders
    pub orders: Vec<ParentOrderRecord>,
}

impl Fixtures {
    /// Load the fixtures embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded fixture fails to parse or references
    /// an unknown supplier or product.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_yaml(SUPPLIERS_YAML, PRODUCTS_YAML, ORDERS_YAML)
    }

    /// Parse and resolve fixtures from YAML sources.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to parse or references an unknown
    /// supplier or product.
    pub fn from_yaml(suppliers: &str, products: &str, orders: &str) -> Result<Self, FixtureError> {
        let suppliers_fixture: SuppliersFixture = serde_norway::from_str(suppliers)?;
        let products_fixture: ProductsFixture = serde_norway::from_str(products)?;
        let orders_fixture: OrdersFixture = serde_norway::from_str(orders)?;

        let suppliers = suppliers_fixture
            .suppliers
            .into_iter()
            .map(Supplier::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let supplier_index: FxHashMap<SupplierId, &Supplier> = suppliers
            .iter()
            .map(|supplier| (supplier.id.clone(), supplier))
            .collect();

        let products = products_fixture
            .products
            .into_iter()
            .map(|fixture| fixture.into_product(&supplier_index))
            .collect::<Result<Vec<_>, _>>()?;

        let product_index: FxHashMap<ProductId, &Product> = products
            .iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        let orders = orders_fixture
            .orders
            .into_iter()
            .map(|fixture| fixture.into_record(&supplier_index, &product_index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            suppliers,
            products,
            orders,
        })
    }
}

/// Parse a decimal amount (e.g. "12.50").
///
/// # Errors
///
/// Returns an error if the string is not a decimal number.
pub fn parse_amount(s: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(s.trim()).map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}

/// Parse an RFC 3339 timestamp (e.g. "2026-09-02T08:30:00Z").
///
/// # Errors
///
/// Returns an error if the string is not a valid timestamp.
pub fn parse_timestamp(s: &str) -> Result<Timestamp, FixtureError> {
    s.trim()
        .parse::<Timestamp>()
        .map_err(|_err| FixtureError::InvalidTimestamp(s.to_string()))
}

fn lookup_supplier<'a>(
    index: &FxHashMap<SupplierId, &'a Supplier>,
    id: &str,
) -> Result<&'a Supplier, FixtureError> {
    index
        .get(id)
        .copied()
        .ok_or_else(|| FixtureError::UnknownSupplier(id.to_string()))
}

#[cfg(test)]
mod tests {
    use freshline::orders::parent::ParentOrder;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn embedded_fixtures_resolve() -> TestResult {
        let fixtures = Fixtures::embedded()?;

        assert_eq!(fixtures.suppliers.len(), 3);
        assert_eq!(fixtures.products.len(), 9);
        assert_eq!(fixtures.orders.len(), 3);

        Ok(())
    }

    #[test]
    fn every_seed_order_has_a_fulfillment_per_supplier() -> TestResult {
        let fixtures = Fixtures::embedded()?;

        for record in fixtures.orders {
            let order = ParentOrder::hydrate(record);
            let mut suppliers: Vec<&str> = order
                .fulfillments
                .iter()
                .map(|fulfillment| fulfillment.supplier.id.as_str())
                .collect();

            suppliers.sort_unstable();
            suppliers.dedup();

            assert_eq!(suppliers.len(), order.supplier_count(), "order {}", order.id);
        }

        Ok(())
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        let result = parse_amount("twelve");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(value)) if value == "twelve"));
    }

    #[test]
    fn parse_timestamp_rejects_dates_without_offsets() {
        let result = parse_timestamp("2026-09-02 08:30");

        assert!(matches!(result, Err(FixtureError::InvalidTimestamp(_))));
    }

    #[test]
    fn unknown_supplier_reference_is_reported() {
        let products = r#"
products:
  - id: mystery
    name: Mystery Box
    category: pantry
    price: "1.00"
    supplier: nobody
"#;

        let result = Fixtures::from_yaml("suppliers: []", products, "orders: []");

        assert!(matches!(result, Err(FixtureError::UnknownSupplier(id)) if id == "nobody"));
    }
}
