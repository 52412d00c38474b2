//! Supplier Fixtures

use freshline::suppliers::Supplier;
use serde::Deserialize;

use crate::fixtures::{FixtureError, parse_amount};

/// Wrapper for suppliers in YAML
#[derive(Debug, Deserialize)]
pub struct SuppliersFixture {
    /// Supplier fixtures, in display order
    pub suppliers: Vec<SupplierFixture>,
}

/// Supplier Fixture
#[derive(Debug, Deserialize)]
pub struct SupplierFixture {
    /// Supplier id
    pub id: String,

    /// Trading name
    pub name: String,

    /// Shipping location
    pub location: String,

    /// Profile description
    #[serde(default)]
    pub description: String,

    /// Categories carried
    #[serde(default)]
    pub categories: Vec<String>,

    /// Rating (e.g. "4.5")
    pub rating: String,
}

impl TryFrom<SupplierFixture> for Supplier {
    type Error = FixtureError;

    fn try_from(fixture: SupplierFixture) -> Result<Self, Self::Error> {
        Ok(Supplier {
            id: fixture.id.into(),
            name: fixture.name,
            location: fixture.location,
            description: fixture.description,
            categories: fixture.categories,
            rating: parse_amount(&fixture.rating)?,
        })
    }
}
