//! Suppliers service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuppliersServiceError {
    #[error("supplier not found")]
    NotFound,
}
