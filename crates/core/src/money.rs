//! Money

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};

/// Round a monetary amount to 2 decimal places, midpoints away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a monetary amount with exactly 2 decimal places.
#[must_use]
pub fn fixed_2dp(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(2);

    rounded.to_string()
}

/// Look up a supported display currency by its ISO code.
#[must_use]
pub fn currency_for_code(code: &str) -> Option<&'static Currency> {
    match code.trim().to_ascii_uppercase().as_str() {
        "GBP" => Some(GBP),
        "USD" => Some(USD),
        "EUR" => Some(EUR),
        _ => None,
    }
}

/// Format an amount for display in the given currency.
///
/// Unsupported currency codes fall back to `"<amount> <CODE>"`.
#[must_use]
pub fn format_amount(amount: Decimal, currency_code: &str) -> String {
    let minor_units = round_money(amount)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor_units| minor_units.to_i64());

    match (currency_for_code(currency_code), minor_units) {
        (Some(currency), Some(minor_units)) => Money::from_minor(minor_units, currency).to_string(),
        _ => format!(
            "{} {}",
            fixed_2dp(amount),
            currency_code.trim().to_ascii_uppercase()
        ),
    }
}
