//! Suppliers

use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Supplier Id
pub type SupplierId = TypedId<Supplier>;

/// Supplier
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    /// Supplier id
    pub id: SupplierId,

    /// Trading name
    pub name: String,

    /// City or region the supplier ships from
    pub location: String,

    /// Short description shown on the supplier profile
    pub description: String,

    /// Product categories the supplier carries
    pub categories: Vec<String>,

    /// Average buyer rating (0-5)
    pub rating: Decimal,
}

impl Supplier {
    /// The reference embedded in products, line items and fulfillments.
    #[must_use]
    pub fn to_ref(&self) -> SupplierRef {
        SupplierRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// A lightweight pointer to a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupplierRef {
    /// Supplier id
    pub id: SupplierId,

    /// Supplier display name
    pub name: String,
}
