//! Parent Orders

use jiff::Timestamp;
use serde::Deserialize;

use crate::{
    ids::TypedId,
    orders::{
        fulfillments::{Fulfillment, FulfillmentRecord, OrderTotals},
        status::{ParentOrderStatus, derive_parent_status},
    },
};

/// Parent Order Id
pub type ParentOrderId = TypedId<ParentOrderRecord>;

/// How the buyer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    /// Card payment at checkout
    Card,

    /// Bank transfer after confirmation
    BankTransfer,

    /// Supplier invoice on delivery
    Invoice,
}

/// Where a payment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatus {
    /// Not yet collected
    Pending,

    /// Funds reserved
    Authorized,

    /// Collected
    Paid,

    /// Returned to the buyer
    Refunded,
}

/// Payment record of a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Payment method
    pub method: PaymentMethod,

    /// Payment status
    pub status: PaymentStatus,

    /// Processor or invoice reference
    pub reference: Option<String>,
}

/// One checkout, as stored. Its status is never stored; see [`ParentOrder`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParentOrderRecord {
    /// Order id
    pub id: ParentOrderId,

    /// When the order was placed
    pub placed_at: Timestamp,

    /// Per-supplier fulfillments
    pub fulfillments: Vec<FulfillmentRecord>,

    /// Payment record
    pub payment: Payment,
}

/// A checkout with its status derived and totals aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentOrder {
    /// Order id
    pub id: ParentOrderId,

    /// When the order was placed
    pub placed_at: Timestamp,

    /// Derived from the fulfillment statuses
    pub status: ParentOrderStatus,

    /// Per-supplier fulfillments
    pub fulfillments: Vec<Fulfillment>,

    /// Field-by-field sum of the fulfillment totals
    pub totals: OrderTotals,

    /// Payment record
    pub payment: Payment,
}

impl ParentOrder {
    /// Hydrate a stored order into its read view.
    #[must_use]
    pub fn hydrate(record: ParentOrderRecord) -> Self {
        let fulfillments: Vec<Fulfillment> = record
            .fulfillments
            .into_iter()
            .map(Fulfillment::hydrate)
            .collect();

        Self {
            id: record.id,
            placed_at: record.placed_at,
            status: derive_parent_status(fulfillments.iter().map(|fulfillment| fulfillment.status)),
            totals: aggregate_parent_totals(&fulfillments),
            fulfillments,
            payment: record.payment,
        }
    }

    /// Number of suppliers involved.
    #[must_use]
    pub fn supplier_count(&self) -> usize {
        self.fulfillments.len()
    }

    /// Sum of item quantities across fulfillments.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.fulfillments.iter().map(Fulfillment::item_count).sum()
    }
}

/// Sum the already-rounded totals of each fulfillment.
///
/// Parent totals are never recomputed from raw items, so the parent total is
/// always exactly the sum of its fulfillments' totals.
#[must_use]
pub fn aggregate_parent_totals(fulfillments: &[Fulfillment]) -> OrderTotals {
    fulfillments
        .iter()
        .map(|fulfillment| fulfillment.totals)
        .sum()
}
