//! Checkout service.

use std::sync::Arc;

use freshline::{
    carts::{Cart, actions::CartActions},
    orders::{
        checkout::split_by_supplier,
        fulfillments::{FulfillmentRecord, StatusEvent},
        parent::{ParentOrder, ParentOrderRecord, Payment, PaymentMethod, PaymentStatus},
        status::FulfillmentStatus,
    },
};
use jiff::Timestamp;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    carts::{errors::CheckoutError, store::CartStore},
    orders::OrderStore,
};

/// Turns a session cart into a stored parent order.
#[derive(Clone)]
pub struct CheckoutService {
    orders: Arc<dyn OrderStore>,
}

impl CheckoutService {
    #[must_use]
    pub fn new(orders: Arc<dyn OrderStore>) -> Self {
        Self { orders }
    }

    /// Place an order for everything in the cart, then empty it.
    ///
    /// The cart is left untouched when the order cannot be stored.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart, or an error when
    /// the order store rejects the order.
    pub async fn checkout(
        &self,
        cart: &mut CartStore,
        payment_method: PaymentMethod,
    ) -> Result<ParentOrder, CheckoutError> {
        if cart.cart().is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let record = build_order_record(cart.cart(), payment_method, Timestamp::now());

        self.orders.save_order(record.clone()).await?;

        cart.clear_cart();

        info!(
            order = %record.id,
            fulfillments = record.fulfillments.len(),
            "order placed"
        );

        Ok(ParentOrder::hydrate(record))
    }
}

/// Build a parent order with one `processing` fulfillment per supplier.
#[must_use]
pub fn build_order_record(
    cart: &Cart,
    payment_method: PaymentMethod,
    placed_at: Timestamp,
) -> ParentOrderRecord {
    let fulfillments = split_by_supplier(cart.items())
        .into_iter()
        .map(|group| FulfillmentRecord {
            id: format!("FUL-{}", Uuid::now_v7()).into(),
            supplier: group.supplier,
            status: FulfillmentStatus::Processing,
            eta: None,
            delivery_window: None,
            items: group.items,
            timeline: vec![StatusEvent {
                status: FulfillmentStatus::Processing,
                at: placed_at,
                note: None,
            }],
        })
        .collect();

    ParentOrderRecord {
        id: format!("ORD-{}", Uuid::now_v7()).into(),
        placed_at,
        fulfillments,
        payment: Payment {
            method: payment_method,
            status: initial_payment_status(payment_method),
            reference: None,
        },
    }
}

fn initial_payment_status(method: PaymentMethod) -> PaymentStatus {
    match method {
        PaymentMethod::Card => PaymentStatus::Authorized,
        PaymentMethod::BankTransfer | PaymentMethod::Invoice => PaymentStatus::Pending,
    }
}
