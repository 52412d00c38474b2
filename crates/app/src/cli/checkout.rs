use std::str::FromStr;

use clap::{Args, ValueEnum};
use freshline::{
    carts::actions::CartActions, i18n::MessageKey, money::round_money,
    orders::parent::PaymentMethod, products::ProductId,
};
use freshline_app::{context::Session, domain::carts::CheckoutError};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::cli::render::{Locale, cart_table, order_detail};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Buy at the listed price, as PRODUCT:QTY
    #[arg(long = "direct", value_name = "PRODUCT:QTY")]
    direct: Vec<DirectLine>,

    /// Offer a unit price, as PRODUCT:QTY:PRICE
    #[arg(long = "offer", value_name = "PRODUCT:QTY:PRICE")]
    offer: Vec<OfferLine>,

    /// Payment method
    #[arg(long, value_enum, default_value_t = PaymentArg::Card)]
    payment: PaymentArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaymentArg {
    Card,
    BankTransfer,
    Invoice,
}

impl From<PaymentArg> for PaymentMethod {
    fn from(arg: PaymentArg) -> Self {
        match arg {
            PaymentArg::Card => PaymentMethod::Card,
            PaymentArg::BankTransfer => PaymentMethod::BankTransfer,
            PaymentArg::Invoice => PaymentMethod::Invoice,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum LineSpecError {
    #[error("expected {expected}, got {input:?}")]
    Shape {
        expected: &'static str,
        input: String,
    },

    #[error("invalid quantity {0:?}")]
    Quantity(String),

    #[error("invalid price {0:?}")]
    Price(String),
}

#[derive(Clone, Debug, PartialEq)]
struct DirectLine {
    product: ProductId,
    quantity: u32,
}

#[derive(Clone, Debug, PartialEq)]
struct OfferLine {
    product: ProductId,
    quantity: u32,
    price: Decimal,
}

impl FromStr for DirectLine {
    type Err = LineSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split(':').collect::<Vec<_>>().as_slice() {
            [product, quantity] if !product.is_empty() => Ok(Self {
                product: ProductId::new(*product),
                quantity: parse_quantity(quantity)?,
            }),
            _ => Err(LineSpecError::Shape {
                expected: "PRODUCT:QTY",
                input: s.to_string(),
            }),
        }
    }
}

impl FromStr for OfferLine {
    type Err = LineSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split(':').collect::<Vec<_>>().as_slice() {
            [product, quantity, price] if !product.is_empty() => Ok(Self {
                product: ProductId::new(*product),
                quantity: parse_quantity(quantity)?,
                price: Decimal::from_str(price)
                    .ok()
                    .filter(|price| round_money(*price) > Decimal::ZERO)
                    .ok_or_else(|| LineSpecError::Price((*price).to_string()))?,
            }),
            _ => Err(LineSpecError::Shape {
                expected: "PRODUCT:QTY:PRICE",
                input: s.to_string(),
            }),
        }
    }
}

fn parse_quantity(quantity: &str) -> Result<u32, LineSpecError> {
    quantity
        .parse::<u32>()
        .ok()
        .filter(|quantity| *quantity > 0)
        .ok_or_else(|| LineSpecError::Quantity(quantity.to_string()))
}

pub(crate) async fn run(
    session: &mut Session,
    locale: &Locale,
    args: CheckoutArgs,
) -> Result<(), String> {
    for line in args.direct {
        let product = session
            .context()
            .products
            .get_product(line.product.clone())
            .await
            .map_err(|error| format!("{}: {error}", line.product))?;

        if !product.in_stock {
            return Err(format!("{}: {}", product.name, locale.t(MessageKey::OutOfStock)));
        }

        session.add_direct_line_item(&product, line.quantity);
    }

    for line in args.offer {
        let product = session
            .context()
            .products
            .get_product(line.product.clone())
            .await
            .map_err(|error| format!("{}: {error}", line.product))?;

        if !product.in_stock {
            return Err(format!("{}: {}", product.name, locale.t(MessageKey::OutOfStock)));
        }

        session.add_offer_line_item(&product, line.quantity, line.price);
    }

    if !session.cart().is_empty() {
        println!("{}", locale.t(MessageKey::Cart));
        println!("{}", cart_table(session.cart(), locale));
    }

    let order = session
        .checkout(args.payment.into())
        .await
        .map_err(|error| match error {
            CheckoutError::EmptyCart => locale.t(MessageKey::EmptyCart).to_string(),
            CheckoutError::Orders(error) => format!("checkout failed: {error}"),
        })?;

    println!("{}: {}", locale.t(MessageKey::OrderPlaced), order.id);
    println!("{}", order_detail(&order, locale));

    Ok(())
}
