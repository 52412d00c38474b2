//! Fulfillments

use std::iter::Sum;

use decimal_percentage::Percentage;
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    ids::TypedId,
    money::round_money,
    orders::{items::OrderItem, status::FulfillmentStatus},
    suppliers::SupplierRef,
};

/// Fulfillment Id
pub type FulfillmentId = TypedId<FulfillmentRecord>;

/// Subtotals above this ship free.
pub const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Delivery fee charged at or below [`FREE_DELIVERY_THRESHOLD`].
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(1_500, 0, 0, false, 2);

/// Flat sales tax applied to every fulfillment.
#[must_use]
pub fn tax_rate() -> Percentage {
    Percentage::from(0.12)
}

/// Monetary summary of a fulfillment or a whole order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of line totals
    pub subtotal: Decimal,

    /// Sales tax
    pub tax: Decimal,

    /// Delivery fee
    pub delivery_fee: Decimal,

    /// `subtotal + tax + delivery_fee`
    pub total: Decimal,
}

impl Sum for OrderTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, totals| Self {
            subtotal: acc.subtotal.saturating_add(totals.subtotal),
            tax: acc.tax.saturating_add(totals.tax),
            delivery_fee: acc.delivery_fee.saturating_add(totals.delivery_fee),
            total: acc.total.saturating_add(totals.total),
        })
    }
}

/// Price a fulfillment's items.
///
/// Every step is rounded to 2 dp. Sums saturate at [`Decimal::MAX`].
#[must_use]
pub fn compute_fulfillment_totals(items: &[OrderItem]) -> OrderTotals {
    let subtotal = round_money(
        items
            .iter()
            .map(OrderItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add),
    );
    let tax = round_money(tax_rate() * subtotal);

    let delivery_fee = if subtotal > FREE_DELIVERY_THRESHOLD {
        Decimal::ZERO
    } else {
        DELIVERY_FEE
    };

    OrderTotals {
        subtotal,
        tax,
        delivery_fee,
        total: round_money(subtotal.saturating_add(tax).saturating_add(delivery_fee)),
    }
}

/// A timestamped status change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEvent {
    /// Status entered
    pub status: FulfillmentStatus,

    /// When it was entered
    pub at: Timestamp,

    /// Optional free-text note from the supplier
    pub note: Option<String>,
}

/// Promised delivery slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    /// Earliest arrival
    pub start: Timestamp,

    /// Latest arrival
    pub end: Timestamp,
}

/// One supplier's part of an order, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FulfillmentRecord {
    /// Fulfillment id
    pub id: FulfillmentId,

    /// Fulfilling supplier
    pub supplier: SupplierRef,

    /// Current status
    pub status: FulfillmentStatus,

    /// Estimated arrival
    pub eta: Option<Timestamp>,

    /// Promised delivery slot
    pub delivery_window: Option<DeliveryWindow>,

    /// Ordered lines
    pub items: Vec<OrderItem>,

    /// Status history, oldest first
    pub timeline: Vec<StatusEvent>,
}

/// A fulfillment with its totals computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Fulfillment {
    /// Fulfillment id
    pub id: FulfillmentId,

    /// Fulfilling supplier
    pub supplier: SupplierRef,

    /// Current status
    pub status: FulfillmentStatus,

    /// Estimated arrival
    pub eta: Option<Timestamp>,

    /// Promised delivery slot
    pub delivery_window: Option<DeliveryWindow>,

    /// Ordered lines
    pub items: Vec<OrderItem>,

    /// Status history, oldest first
    pub timeline: Vec<StatusEvent>,

    /// Computed totals
    pub totals: OrderTotals,
}

impl Fulfillment {
    /// Attach computed totals to a stored fulfillment.
    #[must_use]
    pub fn hydrate(record: FulfillmentRecord) -> Self {
        let totals = compute_fulfillment_totals(&record.items);

        Self {
            id: record.id,
            supplier: record.supplier,
            status: record.status,
            eta: record.eta,
            delivery_window: record.delivery_window,
            items: record.items,
            timeline: record.timeline,
            totals,
        }
    }

    /// Sum of item quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
