//! Freshline Domain Concerns

pub mod carts;
pub mod orders;
pub mod products;
pub mod suppliers;

mod latency;
