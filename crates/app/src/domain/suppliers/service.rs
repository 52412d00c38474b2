//! Suppliers service.

use std::time::Duration;

use async_trait::async_trait;
use freshline::suppliers::{Supplier, SupplierId};
use mockall::automock;

use crate::domain::{latency, suppliers::errors::SuppliersServiceError};

#[derive(Debug, Clone)]
pub struct InMemorySupplierDirectory {
    suppliers: Vec<Supplier>,
    latency: Duration,
}

impl InMemorySupplierDirectory {
    #[must_use]
    pub fn new(suppliers: Vec<Supplier>, latency: Duration) -> Self {
        Self { suppliers, latency }
    }
}

#[async_trait]
impl SupplierDirectory for InMemorySupplierDirectory {
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, SuppliersServiceError> {
        latency::simulate(self.latency).await;

        Ok(self.suppliers.clone())
    }

    async fn get_supplier(&self, supplier: SupplierId) -> Result<Supplier, SuppliersServiceError> {
        latency::simulate(self.latency).await;

        self.suppliers
            .iter()
            .find(|candidate| candidate.id == supplier)
            .cloned()
            .ok_or(SuppliersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait SupplierDirectory: Send + Sync {
    /// Retrieves all suppliers.
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, SuppliersServiceError>;

    /// Retrieve a single supplier.
    async fn get_supplier(&self, supplier: SupplierId) -> Result<Supplier, SuppliersServiceError>;
}
