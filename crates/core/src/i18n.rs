//! Translations
//!
//! Every label is a [`MessageKey`] and every locale is an exhaustive `match`,
//! so a missing translation fails to compile.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    carts::items::PurchaseMode,
    orders::{
        parent::{PaymentMethod, PaymentStatus},
        status::{FulfillmentStatus, ParentOrderStatus},
    },
    pricing::{PricingMode, QuantityUnit},
};

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,

    /// Spanish
    Es,
}

/// Error parsing a language code.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language: {0} (expected \"en\" or \"es\")")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Language::En => "en",
            Language::Es => "es",
        })
    }
}

/// A user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(missing_docs, reason = "variant names are the labels they stand for")]
pub enum MessageKey {
    Cart,
    Catalog,
    Suppliers,
    Orders,
    Order,
    Fulfillment,
    Supplier,
    Product,
    Category,
    Location,
    Rating,
    Quantity,
    Unit,
    Pricing,
    PurchaseMode,
    ListedPrice,
    PricePerKg,
    UnitPrice,
    LineTotal,
    Subtotal,
    Tax,
    DeliveryFee,
    Total,
    Status,
    PlacedAt,
    Eta,
    DeliveryWindow,
    Items,
    Payment,
    InStock,
    OutOfStock,
    EmptyCart,
    OrderNotFound,
    OrderPlaced,
    NoOrders,
    LanguageSaved,
    PricingPerKg,
    PricingBatch,
    UnitKg,
    UnitBatches,
    PurchaseDirect,
    PurchaseOffer,
    FulfillmentProcessing,
    FulfillmentConfirmed,
    FulfillmentPreparing,
    FulfillmentInTransit,
    FulfillmentDelivered,
    FulfillmentCancelled,
    OrderDraft,
    OrderInProgress,
    OrderPartiallyDelivered,
    OrderCompleted,
    OrderCancelled,
    PaymentCard,
    PaymentBankTransfer,
    PaymentInvoice,
    PaymentPending,
    PaymentAuthorized,
    PaymentPaid,
    PaymentRefunded,
}

/// Look up a label in the given language.
#[must_use]
pub fn t(key: MessageKey, language: Language) -> &'static str {
    match language {
        Language::En => en(key),
        Language::Es => es(key),
    }
}

#[expect(
    clippy::match_same_arms,
    reason = "fulfillment and order statuses share some wording"
)]
fn en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Cart => "Cart",
        MessageKey::Catalog => "Catalog",
        MessageKey::Suppliers => "Suppliers",
        MessageKey::Orders => "Orders",
        MessageKey::Order => "Order",
        MessageKey::Fulfillment => "Fulfillment",
        MessageKey::Supplier => "Supplier",
        MessageKey::Product => "Product",
        MessageKey::Category => "Category",
        MessageKey::Location => "Location",
        MessageKey::Rating => "Rating",
        MessageKey::Quantity => "Quantity",
        MessageKey::Unit => "Unit",
        MessageKey::Pricing => "Pricing",
        MessageKey::PurchaseMode => "Purchase",
        MessageKey::ListedPrice => "Listed price",
        MessageKey::PricePerKg => "Price / kg",
        MessageKey::UnitPrice => "Unit price",
        MessageKey::LineTotal => "Line total",
        MessageKey::Subtotal => "Subtotal",
        MessageKey::Tax => "Tax (12%)",
        MessageKey::DeliveryFee => "Delivery",
        MessageKey::Total => "Total",
        MessageKey::Status => "Status",
        MessageKey::PlacedAt => "Placed",
        MessageKey::Eta => "ETA",
        MessageKey::DeliveryWindow => "Delivery window",
        MessageKey::Items => "Items",
        MessageKey::Payment => "Payment",
        MessageKey::InStock => "In stock",
        MessageKey::OutOfStock => "Out of stock",
        MessageKey::EmptyCart => "Your cart is empty",
        MessageKey::OrderNotFound => "Order not found",
        MessageKey::OrderPlaced => "Order placed",
        MessageKey::NoOrders => "No orders yet",
        MessageKey::LanguageSaved => "Language saved",
        MessageKey::PricingPerKg => "Per kg",
        MessageKey::PricingBatch => "Per batch",
        MessageKey::UnitKg => "kg",
        MessageKey::UnitBatches => "batches",
        MessageKey::PurchaseDirect => "Direct",
        MessageKey::PurchaseOffer => "Offer",
        MessageKey::FulfillmentProcessing => "Processing",
        MessageKey::FulfillmentConfirmed => "Confirmed",
        MessageKey::FulfillmentPreparing => "Preparing",
        MessageKey::FulfillmentInTransit => "In transit",
        MessageKey::FulfillmentDelivered => "Delivered",
        MessageKey::FulfillmentCancelled => "Cancelled",
        MessageKey::OrderDraft => "Draft",
        MessageKey::OrderInProgress => "In progress",
        MessageKey::OrderPartiallyDelivered => "Partially delivered",
        MessageKey::OrderCompleted => "Completed",
        MessageKey::OrderCancelled => "Cancelled",
        MessageKey::PaymentCard => "Card",
        MessageKey::PaymentBankTransfer => "Bank transfer",
        MessageKey::PaymentInvoice => "Invoice",
        MessageKey::PaymentPending => "Pending",
        MessageKey::PaymentAuthorized => "Authorized",
        MessageKey::PaymentPaid => "Paid",
        MessageKey::PaymentRefunded => "Refunded",
    }
}

#[expect(
    clippy::match_same_arms,
    reason = "fulfillment and order statuses share some wording"
)]
fn es(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Cart => "Carrito",
        MessageKey::Catalog => "Catálogo",
        MessageKey::Suppliers => "Proveedores",
        MessageKey::Orders => "Pedidos",
        MessageKey::Order => "Pedido",
        MessageKey::Fulfillment => "Entrega",
        MessageKey::Supplier => "Proveedor",
        MessageKey::Product => "Producto",
        MessageKey::Category => "Categoría",
        MessageKey::Location => "Ubicación",
        MessageKey::Rating => "Valoración",
        MessageKey::Quantity => "Cantidad",
        MessageKey::Unit => "Unidad",
        MessageKey::Pricing => "Precio por",
        MessageKey::PurchaseMode => "Compra",
        MessageKey::ListedPrice => "Precio de lista",
        MessageKey::PricePerKg => "Precio / kg",
        MessageKey::UnitPrice => "Precio unitario",
        MessageKey::LineTotal => "Total de línea",
        MessageKey::Subtotal => "Subtotal",
        MessageKey::Tax => "Impuesto (12%)",
        MessageKey::DeliveryFee => "Envío",
        MessageKey::Total => "Total",
        MessageKey::Status => "Estado",
        MessageKey::PlacedAt => "Realizado",
        MessageKey::Eta => "Llegada estimada",
        MessageKey::DeliveryWindow => "Franja de entrega",
        MessageKey::Items => "Artículos",
        MessageKey::Payment => "Pago",
        MessageKey::InStock => "Disponible",
        MessageKey::OutOfStock => "Agotado",
        MessageKey::EmptyCart => "Tu carrito está vacío",
        MessageKey::OrderNotFound => "Pedido no encontrado",
        MessageKey::OrderPlaced => "Pedido realizado",
        MessageKey::NoOrders => "Todavía no hay pedidos",
        MessageKey::LanguageSaved => "Idioma guardado",
        MessageKey::PricingPerKg => "Por kg",
        MessageKey::PricingBatch => "Por lote",
        MessageKey::UnitKg => "kg",
        MessageKey::UnitBatches => "lotes",
        MessageKey::PurchaseDirect => "Directa",
        MessageKey::PurchaseOffer => "Oferta",
        MessageKey::FulfillmentProcessing => "Procesando",
        MessageKey::FulfillmentConfirmed => "Confirmado",
        MessageKey::FulfillmentPreparing => "En preparación",
        MessageKey::FulfillmentInTransit => "En camino",
        MessageKey::FulfillmentDelivered => "Entregado",
        MessageKey::FulfillmentCancelled => "Cancelado",
        MessageKey::OrderDraft => "Borrador",
        MessageKey::OrderInProgress => "En curso",
        MessageKey::OrderPartiallyDelivered => "Entregado parcialmente",
        MessageKey::OrderCompleted => "Completado",
        MessageKey::OrderCancelled => "Cancelado",
        MessageKey::PaymentCard => "Tarjeta",
        MessageKey::PaymentBankTransfer => "Transferencia bancaria",
        MessageKey::PaymentInvoice => "Factura",
        MessageKey::PaymentPending => "Pendiente",
        MessageKey::PaymentAuthorized => "Autorizado",
        MessageKey::PaymentPaid => "Pagado",
        MessageKey::PaymentRefunded => "Reembolsado",
    }
}

impl FulfillmentStatus {
    /// Label for this status.
    #[must_use]
    pub fn message_key(self) -> MessageKey {
        match self {
            FulfillmentStatus::Processing => MessageKey::FulfillmentProcessing,
            FulfillmentStatus::Confirmed => MessageKey::FulfillmentConfirmed,
            FulfillmentStatus::Preparing => MessageKey::FulfillmentPreparing,
            FulfillmentStatus::InTransit => MessageKey::FulfillmentInTransit,
            FulfillmentStatus::Delivered => MessageKey::FulfillmentDelivered,
            FulfillmentStatus::Cancelled => MessageKey::FulfillmentCancelled,
        }
    }
}

impl ParentOrderStatus {
    /// Label for this status.
    #[must_use]
    pub fn message_key(self) -> MessageKey {
        match self {
            ParentOrderStatus::Draft => MessageKey::OrderDraft,
            ParentOrderStatus::InProgress => MessageKey::OrderInProgress,
            ParentOrderStatus::PartiallyDelivered => MessageKey::OrderPartiallyDelivered,
            ParentOrderStatus::Completed => MessageKey::OrderCompleted,
            ParentOrderStatus::Cancelled => MessageKey::OrderCancelled,
        }
    }
}

impl PricingMode {
    /// Label for this pricing mode.
    #[must_use]
    pub fn message_key(self) -> MessageKey {
        match self {
            PricingMode::PerKg => MessageKey::PricingPerKg,
            PricingMode::Batch => MessageKey::PricingBatch,
        }
    }
}

impl QuantityUnit {
    /// Label for this unit.
    #[must_use]
    pub fn message_key(self) -> MessageKey {
        match self {
            QuantityUnit::Kg => MessageKey::UnitKg,
            QuantityUnit::Batches => MessageKey::UnitBatches,
        }
    }
}

impl PurchaseMode {
    /// Label for this purchase mode.
    #[must_use]
    pub fn message_key(self) -> MessageKey {
        match self {
            PurchaseMode::Direct => MessageKey::PurchaseDirect,
            PurchaseMode::Offer => MessageKey::PurchaseOffer,
        }
    }
}

impl PaymentMethod {
    /// Label for this payment method.
    #[must_use]
    pub fn message_key(self) -> MessageKey {
        match self {
            PaymentMethod::Card => MessageKey::PaymentCard,
            PaymentMethod::BankTransfer => MessageKey::PaymentBankTransfer,
            PaymentMethod::Invoice => MessageKey::PaymentInvoice,
        }
    }
}

impl PaymentStatus {
    /// Label for this payment status.
    #[must_use]
    pub fn message_key(self) -> MessageKey {
        match self {
            PaymentStatus::Pending => MessageKey::PaymentPending,
            PaymentStatus::Authorized => MessageKey::PaymentAuthorized,
            PaymentStatus::Paid => MessageKey::PaymentPaid,
            PaymentStatus::Refunded => MessageKey::PaymentRefunded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_codes() {
        assert_eq!("en".parse(), Ok(Language::En));
        assert_eq!(" ES ".parse(), Ok(Language::Es));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(ParseLanguageError("fr".to_string()))
        );
    }

    #[test]
    fn language_display_round_trips() {
        for language in [Language::En, Language::Es] {
            assert_eq!(language.to_string().parse(), Ok(language));
        }
    }

    #[test]
    fn statuses_translate() {
        let key = ParentOrderStatus::PartiallyDelivered.message_key();

        assert_eq!(t(key, Language::En), "Partially delivered");
        assert_eq!(t(key, Language::Es), "Entregado parcialmente");
    }

    #[test]
    fn payments_translate() {
        assert_eq!(
            t(PaymentMethod::BankTransfer.message_key(), Language::Es),
            "Transferencia bancaria"
        );
        assert_eq!(t(PaymentStatus::Paid.message_key(), Language::En), "Paid");
    }

    #[test]
    fn units_translate() {
        assert_eq!(t(QuantityUnit::Batches.message_key(), Language::Es), "lotes");
        assert_eq!(t(PricingMode::PerKg.message_key(), Language::En), "Per kg");
    }
}
