//! Orders

pub mod errors;
pub mod service;
pub mod store;

pub use errors::OrdersServiceError;
pub use service::OrdersService;
pub use store::*;
