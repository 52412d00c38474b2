//! Orders service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,
}
