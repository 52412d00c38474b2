//! Freshline
//!
//! Freshline is the pricing, cart and order aggregation core of a B2B food-supply
//! marketplace: restaurants buy from suppliers either directly at listed prices
//! or by making offers, and one checkout fans out into a fulfillment per supplier.

pub mod carts;
pub mod i18n;
pub mod ids;
pub mod money;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod suppliers;
