//! Checkout errors.

use thiserror::Error;

use crate::domain::orders::OrdersServiceError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,

    #[error("failed to store order")]
    Orders(#[from] OrdersServiceError),
}
