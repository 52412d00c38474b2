//! Order Statuses

use serde::Deserialize;

/// Where one supplier's part of an order is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FulfillmentStatus {
    /// Received, awaiting supplier confirmation
    Processing,

    /// Accepted by the supplier
    Confirmed,

    /// Being picked and packed
    Preparing,

    /// Out for delivery
    InTransit,

    /// Handed over to the buyer
    Delivered,

    /// Called off
    Cancelled,
}

/// Status of a whole checkout, derived from its fulfillments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentOrderStatus {
    /// No fulfillments yet
    Draft,

    /// At least one fulfillment still open and none delivered
    InProgress,

    /// Some, but not all, fulfillments delivered
    PartiallyDelivered,

    /// Every fulfillment delivered
    Completed,

    /// Every fulfillment cancelled
    Cancelled,
}

/// Derive a parent order's status from its fulfillment statuses.
///
/// The result depends only on the multiset of statuses, never their order:
///
/// 1. none → [`ParentOrderStatus::Draft`]
/// 2. all cancelled → [`ParentOrderStatus::Cancelled`]
/// 3. all delivered → [`ParentOrderStatus::Completed`]
/// 4. some delivered → [`ParentOrderStatus::PartiallyDelivered`]
/// 5. otherwise → [`ParentOrderStatus::InProgress`]
#[must_use]
pub fn derive_parent_status<I>(statuses: I) -> ParentOrderStatus
where
    I: IntoIterator<Item = FulfillmentStatus>,
{
    let (count, delivered, cancelled) =
        statuses
            .into_iter()
            .fold((0_usize, 0_usize, 0_usize), |(count, delivered, cancelled), status| {
                match status {
                    FulfillmentStatus::Delivered => (count + 1, delivered + 1, cancelled),
                    FulfillmentStatus::Cancelled => (count + 1, delivered, cancelled + 1),
                    _ => (count + 1, delivered, cancelled),
                }
            });

    if count == 0 {
        ParentOrderStatus::Draft
    } else if cancelled == count {
        ParentOrderStatus::Cancelled
    } else if delivered == count {
        ParentOrderStatus::Completed
    } else if delivered > 0 {
        ParentOrderStatus::PartiallyDelivered
    } else {
        ParentOrderStatus::InProgress
    }
}
