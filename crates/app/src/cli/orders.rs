use clap::Args;
use freshline::{i18n::MessageKey, orders::parent::ParentOrderId};
use freshline_app::{context::Session, domain::orders::OrdersServiceError};

use crate::cli::render::{Locale, order_detail, orders_table};

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Order id, e.g. ORD-1001
    id: String,
}

pub(crate) async fn list(session: &Session, locale: &Locale) -> Result<(), String> {
    let orders = session
        .context()
        .orders
        .parent_orders()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("{}", locale.t(MessageKey::NoOrders));
        return Ok(());
    }

    println!("{}", orders_table(&orders, locale));

    Ok(())
}

pub(crate) async fn show(session: &Session, locale: &Locale, args: OrderArgs) -> Result<(), String> {
    let order = session
        .context()
        .orders
        .parent_order(ParentOrderId::new(args.id.trim()))
        .await
        .map_err(|error| match error {
            OrdersServiceError::NotFound => {
                format!("{}: {}", locale.t(MessageKey::OrderNotFound), args.id)
            }
        })?;

    println!("{}", order_detail(&order, locale));

    Ok(())
}
