//! Products service.

use std::time::Duration;

use async_trait::async_trait;
use freshline::{
    products::{Product, ProductId},
    suppliers::SupplierId,
};
use mockall::automock;
use tracing::debug;

use crate::domain::{latency, products::errors::ProductsServiceError};

/// Read-only catalog backed by an in-memory snapshot.
#[derive(Debug, Clone)]
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
    latency: Duration,
}

impl InMemoryProductCatalog {
    #[must_use]
    pub fn new(products: Vec<Product>, latency: Duration) -> Self {
        Self { products, latency }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        latency::simulate(self.latency).await;

        Ok(self.products.clone())
    }

    async fn list_supplier_products(
        &self,
        supplier: SupplierId,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        latency::simulate(self.latency).await;

        let products: Vec<Product> = self
            .products
            .iter()
            .filter(|product| product.supplier.id == supplier)
            .cloned()
            .collect();

        debug!(%supplier, count = products.len(), "listed supplier products");

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        latency::simulate(self.latency).await;

        self.products
            .iter()
            .find(|candidate| candidate.id == product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves the products of one supplier.
    async fn list_supplier_products(
        &self,
        supplier: SupplierId,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;
}
