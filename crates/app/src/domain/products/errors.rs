//! Products service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,
}
