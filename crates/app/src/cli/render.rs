//! Table rendering for command output.

use std::ops::Range;

use freshline::{
    carts::Cart,
    i18n::{Language, MessageKey, t},
    money::format_amount,
    orders::{
        fulfillments::{Fulfillment, OrderTotals},
        items::OrderItem,
        parent::ParentOrder,
    },
    pricing::{
        resolve_listed_unit_price, resolve_price_per_kg, resolve_pricing_mode,
        resolve_quantity_unit,
    },
    products::Product,
    suppliers::Supplier,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Language and currency for one run.
#[derive(Debug, Clone)]
pub(crate) struct Locale {
    language: Language,
    currency: String,
}

impl Locale {
    pub(crate) fn new(language: Language, currency: &str) -> Self {
        Self {
            language,
            currency: currency.to_string(),
        }
    }

    pub(crate) fn t(&self, key: MessageKey) -> &'static str {
        t(key, self.language)
    }

    pub(crate) fn amount(&self, amount: Decimal) -> String {
        format_amount(amount, &self.currency)
    }
}

pub(crate) fn catalog_table(products: &[Product], locale: &Locale) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "",
        locale.t(MessageKey::Product),
        locale.t(MessageKey::Supplier),
        locale.t(MessageKey::Category),
        locale.t(MessageKey::Pricing),
        locale.t(MessageKey::ListedPrice),
        locale.t(MessageKey::PricePerKg),
        "",
    ]);

    for product in products {
        let unit = locale.t(resolve_quantity_unit(product).message_key());
        let stock = if product.in_stock {
            MessageKey::InStock
        } else {
            MessageKey::OutOfStock
        };

        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.supplier.name.clone(),
            product.category.clone(),
            locale
                .t(resolve_pricing_mode(product).message_key())
                .to_string(),
            format!(
                "{} / {unit}",
                locale.amount(resolve_listed_unit_price(product))
            ),
            locale.amount(resolve_price_per_kg(product)),
            locale.t(stock).to_string(),
        ]);
    }

    finish(builder, 5..7)
}

pub(crate) fn suppliers_table(suppliers: &[Supplier], locale: &Locale) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "",
        locale.t(MessageKey::Supplier),
        locale.t(MessageKey::Location),
        locale.t(MessageKey::Category),
        locale.t(MessageKey::Rating),
    ]);

    for supplier in suppliers {
        builder.push_record([
            supplier.id.to_string(),
            supplier.name.clone(),
            supplier.location.clone(),
            supplier.categories.join(", "),
            supplier.rating.to_string(),
        ]);
    }

    finish(builder, 4..5)
}

pub(crate) fn orders_table(orders: &[ParentOrder], locale: &Locale) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        locale.t(MessageKey::Order),
        locale.t(MessageKey::PlacedAt),
        locale.t(MessageKey::Status),
        locale.t(MessageKey::Suppliers),
        locale.t(MessageKey::Items),
        locale.t(MessageKey::Total),
    ]);

    for order in orders {
        builder.push_record([
            order.id.to_string(),
            timestamp(order.placed_at),
            locale.t(order.status.message_key()).to_string(),
            order.supplier_count().to_string(),
            order.item_count().to_string(),
            locale.amount(order.totals.total),
        ]);
    }

    finish(builder, 3..6)
}

pub(crate) fn cart_table(cart: &Cart, locale: &Locale) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        locale.t(MessageKey::Product),
        locale.t(MessageKey::Supplier),
        locale.t(MessageKey::Quantity),
        locale.t(MessageKey::PurchaseMode),
        locale.t(MessageKey::UnitPrice),
        locale.t(MessageKey::LineTotal),
    ]);

    for item in cart.items() {
        builder.push_record([
            item.product.name.clone(),
            item.supplier.name.clone(),
            format!(
                "{} {}",
                item.quantity,
                locale.t(item.product.unit.message_key())
            ),
            locale.t(item.purchase_mode.message_key()).to_string(),
            locale.amount(item.unit_price),
            locale.amount(item.total_price),
        ]);
    }

    builder.push_record([
        locale.t(MessageKey::Total).to_string(),
        String::new(),
        cart.item_count().to_string(),
        String::new(),
        String::new(),
        locale.amount(cart.total()),
    ]);

    finish(builder, 4..6)
}

pub(crate) fn order_detail(order: &ParentOrder, locale: &Locale) -> String {
    let mut sections = vec![
        format!(
            "{} {} · {}",
            locale.t(MessageKey::Order),
            order.id,
            locale.t(order.status.message_key())
        ),
        format!(
            "{}: {}",
            locale.t(MessageKey::PlacedAt),
            timestamp(order.placed_at)
        ),
        payment_line(order, locale),
    ];

    for fulfillment in &order.fulfillments {
        sections.push(String::new());
        sections.push(fulfillment_section(fulfillment, locale));
    }

    sections.push(String::new());
    sections.push(totals_table(&order.totals, locale));

    sections.join("\n")
}

fn payment_line(order: &ParentOrder, locale: &Locale) -> String {
    let payment = &order.payment;
    let mut line = format!(
        "{}: {} · {}",
        locale.t(MessageKey::Payment),
        locale.t(payment.method.message_key()),
        locale.t(payment.status.message_key())
    );

    if let Some(reference) = &payment.reference {
        line.push_str(&format!(" ({reference})"));
    }

    line
}

fn fulfillment_section(fulfillment: &Fulfillment, locale: &Locale) -> String {
    let mut lines = vec![format!(
        "{} {} · {} · {}",
        locale.t(MessageKey::Fulfillment),
        fulfillment.id,
        fulfillment.supplier.name,
        locale.t(fulfillment.status.message_key())
    )];

    if let Some(eta) = fulfillment.eta {
        lines.push(format!("{}: {}", locale.t(MessageKey::Eta), timestamp(eta)));
    }

    if let Some(window) = fulfillment.delivery_window {
        lines.push(format!(
            "{}: {} - {}",
            locale.t(MessageKey::DeliveryWindow),
            timestamp(window.start),
            timestamp(window.end)
        ));
    }

    lines.push(items_table(&fulfillment.items, locale));
    lines.push(totals_table(&fulfillment.totals, locale));

    lines.join("\n")
}

fn items_table(items: &[OrderItem], locale: &Locale) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        locale.t(MessageKey::Product),
        locale.t(MessageKey::Quantity),
        locale.t(MessageKey::PurchaseMode),
        locale.t(MessageKey::UnitPrice),
        locale.t(MessageKey::LineTotal),
    ]);

    for item in items {
        builder.push_record([
            item.product_name.clone(),
            format!("{} {}", item.quantity, locale.t(item.unit.message_key())),
            locale.t(item.purchase_mode.message_key()).to_string(),
            locale.amount(item.unit_price()),
            locale.amount(item.line_total()),
        ]);
    }

    finish(builder, 3..5)
}

fn totals_table(totals: &OrderTotals, locale: &Locale) -> String {
    let mut builder = Builder::default();

    for (key, amount) in [
        (MessageKey::Subtotal, totals.subtotal),
        (MessageKey::Tax, totals.tax),
        (MessageKey::DeliveryFee, totals.delivery_fee),
        (MessageKey::Total, totals.total),
    ] {
        builder.push_record([locale.t(key).to_string(), locale.amount(amount)]);
    }

    finish(builder, 1..2)
}

fn finish(builder: Builder, amount_columns: Range<usize>) -> String {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(amount_columns), Alignment::right());

    table.to_string()
}

fn timestamp(at: Timestamp) -> String {
    at.strftime("%Y-%m-%d %H:%M UTC").to_string()
}
