//! Pricing
//!
//! Resolves how a catalog product is sold (per kg or per batch), what one unit
//! costs and which unit quantities are counted in. Every resolver is total:
//! malformed batch fields fall back to per-kg pricing.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{carts::items::PurchaseMode, money::round_money, products::Product};

/// How a product is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingMode {
    /// Priced per kilogram
    PerKg,

    /// Priced per fixed-weight batch
    Batch,
}

impl PricingMode {
    /// Wire name used in line-item keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PricingMode::PerKg => "perKg",
            PricingMode::Batch => "batch",
        }
    }
}

/// Unit a quantity is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuantityUnit {
    /// Kilograms
    Kg,

    /// Whole batches
    Batches,
}

/// Batch weight and price, when both are present and usable.
fn batch_terms(product: &Product) -> Option<(Decimal, Decimal)> {
    match (product.batch_weight_kg, product.batch_price) {
        (Some(weight), Some(price)) if weight > Decimal::ZERO && price >= Decimal::ZERO => {
            Some((weight, price))
        }
        _ => None,
    }
}

/// Resolve the effective pricing mode of a product.
#[must_use]
pub fn resolve_pricing_mode(product: &Product) -> PricingMode {
    match (batch_terms(product), product.pricing_mode) {
        (Some(_), None | Some(PricingMode::Batch)) => PricingMode::Batch,
        (_, explicit) => explicit.unwrap_or(PricingMode::PerKg),
    }
}

/// Resolve the listed price of one unit (kg or batch).
#[must_use]
pub fn resolve_listed_unit_price(product: &Product) -> Decimal {
    match resolve_pricing_mode(product) {
        PricingMode::Batch => product.batch_price.unwrap_or(product.price),
        PricingMode::PerKg => product.price,
    }
}

/// Resolve the price per kg, for comparing batch and per-kg listings.
#[must_use]
pub fn resolve_price_per_kg(product: &Product) -> Decimal {
    if resolve_pricing_mode(product) == PricingMode::PerKg {
        return product.price;
    }

    match (product.batch_price, product.batch_weight_kg) {
        (Some(price), Some(weight)) if weight > Decimal::ZERO => price
            .checked_div(weight)
            .map_or(product.price, round_money),
        _ => product.price,
    }
}

/// Resolve the unit a product's quantities are counted in.
#[must_use]
pub fn resolve_quantity_unit(product: &Product) -> QuantityUnit {
    match resolve_pricing_mode(product) {
        PricingMode::Batch => QuantityUnit::Batches,
        PricingMode::PerKg => QuantityUnit::Kg,
    }
}

/// The unit price actually charged.
///
/// An offer price only applies to offer purchases, and only once one is set.
#[must_use]
pub fn effective_unit_price(
    purchase_mode: PurchaseMode,
    listed_unit_price: Decimal,
    offered_unit_price: Option<Decimal>,
) -> Decimal {
    match (purchase_mode, offered_unit_price) {
        (PurchaseMode::Offer, Some(offered)) => offered,
        _ => listed_unit_price,
    }
}

#[cfg(test)]
mod tests {
    use crate::suppliers::SupplierRef;

    use super::*;

    fn product(
        batch_weight_kg: Option<Decimal>,
        batch_price: Option<Decimal>,
        pricing_mode: Option<PricingMode>,
    ) -> Product {
        Product {
            id: "tomatoes".into(),
            name: "Roma Tomatoes".to_string(),
            category: "produce".to_string(),
            image: None,
            price: Decimal::new(320, 2),
            batch_weight_kg,
            batch_price,
            pricing_mode,
            supplier: SupplierRef {
                id: "green-valley".into(),
                name: "Green Valley Farms".to_string(),
            },
            in_stock: true,
        }
    }

    #[test]
    fn per_kg_is_the_default() {
        let product = product(None, None, None);

        assert_eq!(resolve_pricing_mode(&product), PricingMode::PerKg);
        assert_eq!(resolve_listed_unit_price(&product), Decimal::new(320, 2));
        assert_eq!(resolve_price_per_kg(&product), Decimal::new(320, 2));
        assert_eq!(resolve_quantity_unit(&product), QuantityUnit::Kg);
    }

    #[test]
    fn batch_fields_switch_to_batch_pricing() {
        let product = product(Some(Decimal::from(5)), Some(Decimal::new(1400, 2)), None);

        assert_eq!(resolve_pricing_mode(&product), PricingMode::Batch);
        assert_eq!(resolve_listed_unit_price(&product), Decimal::new(1400, 2));
        assert_eq!(resolve_price_per_kg(&product), Decimal::new(280, 2));
        assert_eq!(resolve_quantity_unit(&product), QuantityUnit::Batches);
    }

    #[test]
    fn explicit_per_kg_overrides_batch_fields() {
        let product = product(
            Some(Decimal::from(5)),
            Some(Decimal::new(1400, 2)),
            Some(PricingMode::PerKg),
        );

        assert_eq!(resolve_pricing_mode(&product), PricingMode::PerKg);
        assert_eq!(resolve_listed_unit_price(&product), Decimal::new(320, 2));
    }

    #[test]
    fn partial_batch_fields_fall_back_to_per_kg() {
        let missing_price = product(Some(Decimal::from(5)), None, None);
        let zero_weight = product(Some(Decimal::ZERO), Some(Decimal::from(10)), None);

        assert_eq!(resolve_pricing_mode(&missing_price), PricingMode::PerKg);
        assert_eq!(resolve_pricing_mode(&zero_weight), PricingMode::PerKg);
    }

    #[test]
    fn explicit_batch_without_weight_guards_price_per_kg() {
        let product = product(
            Some(Decimal::ZERO),
            Some(Decimal::from(10)),
            Some(PricingMode::Batch),
        );

        assert_eq!(resolve_pricing_mode(&product), PricingMode::Batch);
        assert_eq!(resolve_listed_unit_price(&product), Decimal::from(10));
        assert_eq!(resolve_price_per_kg(&product), Decimal::new(320, 2));
    }

    #[test]
    fn price_per_kg_is_rounded() {
        let product = product(Some(Decimal::from(3)), Some(Decimal::from(10)), None);

        assert_eq!(resolve_price_per_kg(&product), Decimal::new(333, 2));
    }

    #[test]
    fn offer_price_only_applies_to_offers() {
        let listed = Decimal::from(10);
        let offered = Some(Decimal::from(8));

        assert_eq!(
            effective_unit_price(PurchaseMode::Offer, listed, offered),
            Decimal::from(8)
        );
        assert_eq!(effective_unit_price(PurchaseMode::Offer, listed, None), listed);
        assert_eq!(
            effective_unit_price(PurchaseMode::Direct, listed, offered),
            listed
        );
    }
}
