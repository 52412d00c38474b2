//! Orders
//!
//! A parent order is one checkout. It splits into one fulfillment per supplier;
//! fulfillment totals are computed from their items, and the parent's status
//! and totals are derived from its fulfillments.

pub mod checkout;
pub mod fulfillments;
pub mod items;
pub mod parent;
pub mod status;
