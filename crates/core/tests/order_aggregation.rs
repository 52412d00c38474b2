//! Parent order status and totals across supplier fulfillments

use freshline::prelude::*;
use jiff::Timestamp;
use rust_decimal::Decimal;
use testresult::TestResult;

fn supplier(id: &str) -> SupplierRef {
    SupplierRef {
        id: id.into(),
        name: id.to_uppercase(),
    }
}

fn product(id: &str, supplier_id: &str, price: Decimal) -> Product {
    Product {
        id: id.into(),
        name: id.to_uppercase(),
        category: "produce".to_string(),
        image: None,
        price,
        batch_weight_kg: None,
        batch_price: None,
        pricing_mode: None,
        supplier: supplier(supplier_id),
        in_stock: true,
    }
}

fn place(cart: &Cart, statuses: &[FulfillmentStatus]) -> ParentOrder {
    let fulfillments = split_by_supplier(cart.items())
        .into_iter()
        .zip(statuses.iter().copied())
        .enumerate()
        .map(|(index, (group, status))| FulfillmentRecord {
            id: format!("FUL-{index}").into(),
            supplier: group.supplier,
            status,
            eta: None,
            delivery_window: None,
            items: group.items,
            timeline: Vec::new(),
        })
        .collect();

    ParentOrder::hydrate(ParentOrderRecord {
        id: "ORD-1".into(),
        placed_at: Timestamp::UNIX_EPOCH,
        fulfillments,
        payment: Payment {
            method: PaymentMethod::Invoice,
            status: PaymentStatus::Pending,
            reference: None,
        },
    })
}

#[test]
fn parent_status_follows_fulfillment_statuses() {
    use FulfillmentStatus::{Cancelled, Confirmed, Delivered, InTransit, Preparing, Processing};

    let cases: [(&[FulfillmentStatus], ParentOrderStatus); 6] = [
        (&[], ParentOrderStatus::Draft),
        (&[Cancelled, Cancelled], ParentOrderStatus::Cancelled),
        (&[Delivered, Delivered], ParentOrderStatus::Completed),
        (&[Delivered, InTransit], ParentOrderStatus::PartiallyDelivered),
        (&[Processing, Confirmed], ParentOrderStatus::InProgress),
        (&[Cancelled, Preparing], ParentOrderStatus::InProgress),
    ];

    for (statuses, expected) in cases {
        assert_eq!(
            derive_parent_status(statuses.iter().copied()),
            expected,
            "statuses {statuses:?}"
        );
    }
}

#[test]
fn checkout_totals_sum_exactly() -> TestResult {
    let mut cart = Cart::empty();
    cart.add_direct_line_item(&product("onions", "north", Decimal::from(100)), 1);
    cart.add_direct_line_item(&product("saffron", "south", Decimal::new(2_505, 1)), 1);

    let order = place(
        &cart,
        &[FulfillmentStatus::Delivered, FulfillmentStatus::InTransit],
    );

    let north = order.fulfillments.first().ok_or("missing north")?;
    let south = order.fulfillments.get(1).ok_or("missing south")?;

    assert_eq!(north.totals.subtotal, Decimal::from(100));
    assert_eq!(south.totals.subtotal, Decimal::new(2_505, 1));
    assert_eq!(order.totals.subtotal, Decimal::new(3_505, 1));

    assert_eq!(north.totals.delivery_fee, Decimal::new(1_500, 2));
    assert_eq!(south.totals.delivery_fee, Decimal::ZERO);
    assert_eq!(order.totals.total, north.totals.total + south.totals.total);

    assert_eq!(order.status, ParentOrderStatus::PartiallyDelivered);
    assert_eq!(order.supplier_count(), 2);

    Ok(())
}

#[test]
fn fulfillment_subtotals_match_cart_lines() {
    let mut cart = Cart::empty();
    cart.add_direct_line_item(&product("leeks", "north", Decimal::new(133, 2)), 3);
    cart.add_offer_line_item(
        &product("chard", "north", Decimal::new(410, 2)),
        7,
        Decimal::new(3_999, 3),
    );
    cart.add_direct_line_item(&product("kale", "south", Decimal::new(275, 2)), 2);

    let order = place(
        &cart,
        &[FulfillmentStatus::Processing, FulfillmentStatus::Processing],
    );

    let fulfilled: Decimal = order
        .fulfillments
        .iter()
        .map(|fulfillment| fulfillment.totals.subtotal)
        .sum();

    assert_eq!(fulfilled, cart.total());
    assert_eq!(order.item_count(), cart.item_count());
    assert_eq!(order.status, ParentOrderStatus::InProgress);
}
