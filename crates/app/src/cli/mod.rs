use clap::{Parser, Subcommand};
use freshline_app::{
    config::AppConfig,
    context::{AppContext, Session},
    observability,
};

use crate::cli::render::Locale;

mod catalog;
mod checkout;
mod language;
mod orders;
mod render;
mod suppliers;

#[derive(Debug, Parser)]
#[command(name = "freshline", about = "Freshline marketplace CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products with their resolved pricing
    Catalog(catalog::CatalogArgs),

    /// List suppliers
    Suppliers,

    /// List orders, newest first
    Orders,

    /// Show one order with its fulfillments
    Order(orders::OrderArgs),

    /// Fill a cart and check it out
    Checkout(checkout::CheckoutArgs),

    /// Save the display language
    Language(language::LanguageArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let context = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to load marketplace data: {error}"))?;

        let mut session = Session::start(context, self.config.preferences_path.clone())
            .map_err(|error| format!("failed to start session: {error}"))?;

        let locale = Locale::new(
            self.config
                .language
                .unwrap_or(session.preferences().language),
            &self.config.currency,
        );

        let result = match self.command {
            Commands::Catalog(args) => catalog::run(&session, &locale, args).await,
            Commands::Suppliers => suppliers::run(&session, &locale).await,
            Commands::Orders => orders::list(&session, &locale).await,
            Commands::Order(args) => orders::show(&session, &locale, args).await,
            Commands::Checkout(args) => checkout::run(&mut session, &locale, args).await,
            Commands::Language(args) => {
                language::run(&mut session, args);
                Ok(())
            }
        };

        session
            .end()
            .map_err(|error| format!("failed to save preferences: {error}"))?;

        result
    }
}
