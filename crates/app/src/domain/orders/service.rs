//! Orders service.
//!
//! Read side of the order store: every order leaves here hydrated, with its
//! status derived and totals aggregated.

use std::{cmp::Reverse, sync::Arc};

use freshline::orders::parent::{ParentOrder, ParentOrderId};
use tracing::warn;

use crate::domain::orders::{errors::OrdersServiceError, store::OrderStore};

#[derive(Clone)]
pub struct OrdersService {
    store: Arc<dyn OrderStore>,
}

impl OrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Hydrated orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    pub async fn parent_orders(&self) -> Result<Vec<ParentOrder>, OrdersServiceError> {
        let mut orders: Vec<ParentOrder> = self
            .store
            .list_orders()
            .await?
            .into_iter()
            .map(ParentOrder::hydrate)
            .collect();

        orders.sort_by_key(|order| Reverse(order.placed_at));

        Ok(orders)
    }

    /// A single hydrated order.
    ///
    /// # Errors
    ///
    /// Returns [`OrdersServiceError::NotFound`] for an unknown id.
    pub async fn parent_order(&self, id: ParentOrderId) -> Result<ParentOrder, OrdersServiceError> {
        match self.store.get_order(id.clone()).await {
            Ok(record) => Ok(ParentOrder::hydrate(record)),
            Err(error) => {
                warn!(order = %id, %error, "order lookup failed");
                Err(error)
            }
        }
    }
}
