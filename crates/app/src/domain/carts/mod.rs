//! Carts

pub mod checkout;
pub mod errors;
pub mod store;

pub use checkout::CheckoutService;
pub use errors::CheckoutError;
pub use store::CartStore;
