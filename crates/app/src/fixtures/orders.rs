//! Order Fixtures

use freshline::{
    carts::items::PurchaseMode,
    money::round_money,
    orders::{
        fulfillments::{DeliveryWindow, FulfillmentRecord, StatusEvent},
        items::OrderItem,
        parent::{ParentOrderRecord, Payment, PaymentMethod, PaymentStatus},
        status::FulfillmentStatus,
    },
    pricing::{resolve_listed_unit_price, resolve_pricing_mode, resolve_quantity_unit},
    products::{Product, ProductId},
    suppliers::{Supplier, SupplierId},
};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::fixtures::{FixtureError, lookup_supplier, parse_amount, parse_timestamp};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Seed orders
    pub orders: Vec<OrderFixture>,
}

/// Parent order fixture
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFixture {
    /// Order id
    pub id: String,

    /// RFC 3339 placement time
    pub placed_at: String,

    /// Payment record
    pub payment: PaymentFixture,

    /// Per-supplier fulfillments
    pub fulfillments: Vec<FulfillmentFixture>,
}

/// Payment fixture
#[derive(Debug, Deserialize)]
pub struct PaymentFixture {
    /// Payment method
    pub method: PaymentMethod,

    /// Payment status
    pub status: PaymentStatus,

    /// Processor or invoice reference
    #[serde(default)]
    pub reference: Option<String>,
}

/// Fulfillment fixture
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentFixture {
    /// Fulfillment id
    pub id: String,

    /// Supplier id
    pub supplier: String,

    /// Current status
    pub status: FulfillmentStatus,

    /// RFC 3339 estimated arrival
    #[serde(default)]
    pub eta: Option<String>,

    /// Promised delivery slot
    #[serde(default)]
    pub delivery_window: Option<DeliveryWindowFixture>,

    /// Ordered lines
    pub items: Vec<OrderItemFixture>,

    /// Status history, oldest first
    #[serde(default)]
    pub timeline: Vec<StatusEventFixture>,
}

/// Delivery window fixture
#[derive(Debug, Deserialize)]
pub struct DeliveryWindowFixture {
    /// RFC 3339 start
    pub start: String,

    /// RFC 3339 end
    pub end: String,
}

/// Order line fixture, priced from the referenced catalog product
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemFixture {
    /// Product id
    pub product: String,

    /// Ordered quantity
    pub quantity: u32,

    /// Purchase mode
    pub purchase_mode: PurchaseMode,

    /// Offered unit price for offer lines
    #[serde(default)]
    pub offered_unit_price: Option<String>,
}

/// Status event fixture
#[derive(Debug, Deserialize)]
pub struct StatusEventFixture {
    /// Status entered
    pub status: FulfillmentStatus,

    /// RFC 3339 time entered
    pub at: String,

    /// Supplier note
    #[serde(default)]
    pub note: Option<String>,
}

impl OrderFixture {
    /// Resolve into a stored order record.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp or price is malformed, or a supplier or
    /// product reference is unknown.
    pub fn into_record(
        self,
        suppliers: &FxHashMap<SupplierId, &Supplier>,
        products: &FxHashMap<ProductId, &Product>,
    ) -> Result<ParentOrderRecord, FixtureError> {
        let fulfillments = self
            .fulfillments
            .into_iter()
            .map(|fulfillment| fulfillment.into_record(suppliers, products))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ParentOrderRecord {
            id: self.id.into(),
            placed_at: parse_timestamp(&self.placed_at)?,
            fulfillments,
            payment: Payment {
                method: self.payment.method,
                status: self.payment.status,
                reference: self.payment.reference,
            },
        })
    }
}

impl FulfillmentFixture {
    fn into_record(
        self,
        suppliers: &FxHashMap<SupplierId, &Supplier>,
        products: &FxHashMap<ProductId, &Product>,
    ) -> Result<FulfillmentRecord, FixtureError> {
        let supplier = lookup_supplier(suppliers, &self.supplier)?;

        let items = self
            .items
            .into_iter()
            .map(|item| item.into_order_item(products))
            .collect::<Result<Vec<_>, _>>()?;

        let timeline = self
            .timeline
            .into_iter()
            .map(|event| {
                Ok::<_, FixtureError>(StatusEvent {
                    status: event.status,
                    at: parse_timestamp(&event.at)?,
                    note: event.note,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let delivery_window = self
            .delivery_window
            .map(|window| {
                Ok::<_, FixtureError>(DeliveryWindow {
                    start: parse_timestamp(&window.start)?,
                    end: parse_timestamp(&window.end)?,
                })
            })
            .transpose()?;

        Ok(FulfillmentRecord {
            id: self.id.into(),
            supplier: supplier.to_ref(),
            status: self.status,
            eta: self.eta.as_deref().map(parse_timestamp).transpose()?,
            delivery_window,
            items,
            timeline,
        })
    }
}

impl OrderItemFixture {
    fn into_order_item(
        self,
        products: &FxHashMap<ProductId, &Product>,
    ) -> Result<OrderItem, FixtureError> {
        let product = products
            .get(self.product.as_str())
            .copied()
            .ok_or_else(|| FixtureError::UnknownProduct(self.product.clone()))?;

        let offered_unit_price = match self.purchase_mode {
            PurchaseMode::Offer => self
                .offered_unit_price
                .as_deref()
                .map(parse_amount)
                .transpose()?
                .map(round_money),
            PurchaseMode::Direct => None,
        };

        Ok(OrderItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            unit: resolve_quantity_unit(product),
            quantity: self.quantity,
            pricing_mode: resolve_pricing_mode(product),
            purchase_mode: self.purchase_mode,
            listed_unit_price: resolve_listed_unit_price(product),
            offered_unit_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use freshline::{
        orders::{parent::ParentOrder, status::ParentOrderStatus},
        pricing::PricingMode,
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::fixtures::Fixtures;

    #[test]
    fn seed_orders_derive_their_statuses() -> TestResult {
        let fixtures = Fixtures::embedded()?;

        let statuses: Vec<(String, ParentOrderStatus)> = fixtures
            .orders
            .into_iter()
            .map(ParentOrder::hydrate)
            .map(|order| (order.id.to_string(), order.status))
            .collect();

        assert_eq!(
            statuses,
            vec![
                ("ORD-1001".to_string(), ParentOrderStatus::Completed),
                ("ORD-1002".to_string(), ParentOrderStatus::PartiallyDelivered),
                ("ORD-1003".to_string(), ParentOrderStatus::InProgress),
            ]
        );

        Ok(())
    }

    #[test]
    fn order_items_take_catalog_pricing() -> TestResult {
        let fixtures = Fixtures::embedded()?;

        let eggs = fixtures
            .orders
            .iter()
            .flat_map(|order| &order.fulfillments)
            .flat_map(|fulfillment| &fulfillment.items)
            .find(|item| item.product_id.as_str() == "free-range-eggs")
            .ok_or("missing eggs line")?;

        assert_eq!(eggs.pricing_mode, PricingMode::Batch);
        assert_eq!(eggs.listed_unit_price, Decimal::from(8));
        assert_eq!(eggs.unit_price(), Decimal::new(750, 2));

        Ok(())
    }

    #[test]
    fn unknown_product_reference_is_reported() {
        let orders = r#"
orders:
  - id: ORD-1
    placedAt: "2026-09-02T08:30:00Z"
    payment: { method: card, status: paid }
    fulfillments:
      - id: FUL-1
        supplier: green-valley
        status: processing
        items:
          - product: truffles
            quantity: 1
            purchaseMode: direct
"#;
        let suppliers = "suppliers:\n  - { id: green-valley, name: Green Valley, location: CA, rating: \"5\" }\n";

        let result = Fixtures::from_yaml(suppliers, "products: []", orders);

        assert!(
            matches!(result, Err(crate::fixtures::FixtureError::UnknownProduct(id)) if id == "truffles"),
            "expected UnknownProduct"
        );
    }
}
