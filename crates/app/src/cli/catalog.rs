use clap::Args;
use freshline::suppliers::SupplierId;
use freshline_app::context::Session;

use crate::cli::render::{Locale, catalog_table};

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Only list products of this supplier
    #[arg(long)]
    supplier: Option<String>,
}

pub(crate) async fn run(session: &Session, locale: &Locale, args: CatalogArgs) -> Result<(), String> {
    let products = session.context().products.as_ref();

    let products = match args.supplier {
        Some(supplier) => products
            .list_supplier_products(SupplierId::new(supplier))
            .await
            .map_err(|error| format!("failed to list products: {error}"))?,
        None => products
            .list_products()
            .await
            .map_err(|error| format!("failed to list products: {error}"))?,
    };

    println!("{}", catalog_table(&products, locale));

    Ok(())
}
