//! Freshline prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carts::{
        Cart,
        actions::{CartActions, CartDispatch},
        items::{CartLineItem, LineItemKey, LineItemProduct, NewLineItem, PurchaseMode},
        reducer::{CartAction, reduce},
    },
    i18n::{Language, MessageKey, ParseLanguageError, t},
    ids::TypedId,
    money::{format_amount, round_money},
    orders::{
        checkout::{SupplierGroup, split_by_supplier},
        fulfillments::{
            DeliveryWindow, Fulfillment, FulfillmentId, FulfillmentRecord, OrderTotals,
            StatusEvent, compute_fulfillment_totals,
        },
        items::OrderItem,
        parent::{
            ParentOrder, ParentOrderId, ParentOrderRecord, Payment, PaymentMethod, PaymentStatus,
            aggregate_parent_totals,
        },
        status::{FulfillmentStatus, ParentOrderStatus, derive_parent_status},
    },
    pricing::{
        PricingMode, QuantityUnit, effective_unit_price, resolve_listed_unit_price,
        resolve_price_per_kg, resolve_pricing_mode, resolve_quantity_unit,
    },
    products::{Product, ProductId},
    suppliers::{Supplier, SupplierId, SupplierRef},
};
