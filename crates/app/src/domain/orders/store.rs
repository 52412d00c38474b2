//! Order store.

use std::time::Duration;

use async_trait::async_trait;
use freshline::orders::parent::{ParentOrderId, ParentOrderRecord};
use mockall::automock;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{latency, orders::errors::OrdersServiceError};

/// Order records held in memory for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<ParentOrderRecord>>,
    latency: Duration,
}

impl InMemoryOrderStore {
    #[must_use]
    pub fn new(orders: Vec<ParentOrderRecord>, latency: Duration) -> Self {
        Self {
            orders: RwLock::new(orders),
            latency,
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list_orders(&self) -> Result<Vec<ParentOrderRecord>, OrdersServiceError> {
        latency::simulate(self.latency).await;

        Ok(self.orders.read().await.clone())
    }

    async fn get_order(
        &self,
        order: ParentOrderId,
    ) -> Result<ParentOrderRecord, OrdersServiceError> {
        latency::simulate(self.latency).await;

        self.orders
            .read()
            .await
            .iter()
            .find(|candidate| candidate.id == order)
            .cloned()
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn save_order(&self, order: ParentOrderRecord) -> Result<(), OrdersServiceError> {
        latency::simulate(self.latency).await;

        let mut orders = self.orders.write().await;

        match orders.iter_mut().find(|existing| existing.id == order.id) {
            Some(existing) => {
                debug!(order = %order.id, "replacing stored order");
                *existing = order;
            }
            None => {
                debug!(order = %order.id, "storing new order");
                orders.push(order);
            }
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Retrieves every stored order.
    async fn list_orders(&self) -> Result<Vec<ParentOrderRecord>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(
        &self,
        order: ParentOrderId,
    ) -> Result<ParentOrderRecord, OrdersServiceError>;

    /// Stores an order, replacing any order with the same id.
    async fn save_order(&self, order: ParentOrderRecord) -> Result<(), OrdersServiceError>;
}
