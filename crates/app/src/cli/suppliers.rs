use freshline_app::context::Session;

use crate::cli::render::{Locale, suppliers_table};

pub(crate) async fn run(session: &Session, locale: &Locale) -> Result<(), String> {
    let suppliers = session
        .context()
        .suppliers
        .list_suppliers()
        .await
        .map_err(|error| format!("failed to list suppliers: {error}"))?;

    println!("{}", suppliers_table(&suppliers, locale));

    Ok(())
}
