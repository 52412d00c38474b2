//! App Context

use std::{path::PathBuf, sync::Arc, time::Duration};

use freshline::{
    carts::{Cart, actions::CartDispatch, reducer::CartAction},
    i18n::Language,
    orders::parent::{ParentOrder, PaymentMethod},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    domain::{
        carts::{CartStore, CheckoutError, CheckoutService},
        orders::{InMemoryOrderStore, OrdersService},
        products::{InMemoryProductCatalog, ProductCatalog},
        suppliers::{InMemorySupplierDirectory, SupplierDirectory},
    },
    fixtures::{FixtureError, Fixtures},
    preferences::{Preferences, PreferencesError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load fixtures")]
    Fixtures(#[from] FixtureError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductCatalog>,
    pub suppliers: Arc<dyn SupplierDirectory>,
    pub orders: OrdersService,
    pub checkout: CheckoutService,
}

impl AppContext {
    /// Build application context from the embedded fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded fixtures fail to load.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        Ok(Self::from_fixtures(
            Fixtures::embedded()?,
            config.mock_latency(),
        ))
    }

    /// Build application context over in-memory repositories.
    #[must_use]
    pub fn from_fixtures(fixtures: Fixtures, latency: Duration) -> Self {
        let order_store = Arc::new(InMemoryOrderStore::new(fixtures.orders, latency));

        Self {
            products: Arc::new(InMemoryProductCatalog::new(fixtures.products, latency)),
            suppliers: Arc::new(InMemorySupplierDirectory::new(fixtures.suppliers, latency)),
            orders: OrdersService::new(order_store.clone()),
            checkout: CheckoutService::new(order_store),
        }
    }
}

/// One application session: the cart and preferences between start and end.
pub struct Session {
    context: AppContext,
    cart: CartStore,
    preferences: Preferences,
    preferences_path: PathBuf,
    preferences_changed: bool,
}

impl Session {
    /// Start a session with an empty cart and the saved preferences.
    ///
    /// # Errors
    ///
    /// Returns an error when saved preferences exist but cannot be read.
    pub fn start(
        context: AppContext,
        preferences_path: impl Into<PathBuf>,
    ) -> Result<Self, PreferencesError> {
        let preferences_path = preferences_path.into();
        let preferences = Preferences::load(&preferences_path)?;

        info!(
            language = %preferences.language,
            auth_bypass = preferences.auth_bypass,
            "session started"
        );

        Ok(Self {
            context,
            cart: CartStore::new(),
            preferences,
            preferences_path,
            preferences_changed: false,
        })
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_language(&mut self, language: Language) {
        if self.preferences.language != language {
            self.preferences.language = language;
            self.preferences_changed = true;
        }
    }

    /// Check out the session cart.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty cart or when the order cannot be stored.
    pub async fn checkout(
        &mut self,
        payment_method: PaymentMethod,
    ) -> Result<ParentOrder, CheckoutError> {
        self.context
            .checkout
            .checkout(&mut self.cart, payment_method)
            .await
    }

    /// End the session: save preferences if they changed and drop the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when preferences cannot be written.
    pub fn end(self) -> Result<Preferences, PreferencesError> {
        if self.preferences_changed {
            self.preferences.save(&self.preferences_path)?;
        }

        if !self.cart.cart().is_empty() {
            warn!(
                lines = self.cart.cart().len(),
                "session ended with items in the cart; they are not kept"
            );
        }

        Ok(self.preferences)
    }
}

impl CartDispatch for Session {
    fn dispatch(&mut self, action: CartAction) {
        self.cart.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use freshline::{carts::actions::CartActions, orders::status::ParentOrderStatus};
    use testresult::TestResult;

    use super::*;

    fn context() -> Result<AppContext, FixtureError> {
        Ok(AppContext::from_fixtures(
            Fixtures::embedded()?,
            Duration::ZERO,
        ))
    }

    #[tokio::test]
    async fn checked_out_orders_join_the_order_list() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut session = Session::start(context()?, dir.path().join("preferences.json"))?;

        let salmon = session
            .context()
            .products
            .get_product("atlantic-salmon".into())
            .await?;
        let milk = session
            .context()
            .products
            .get_product("whole-milk".into())
            .await?;

        session.add_direct_line_item(&salmon, 2);
        session.add_direct_line_item(&milk, 12);

        let placed = session.checkout(PaymentMethod::Card).await?;
        let orders = session.context().orders.parent_orders().await?;

        assert!(
            orders.iter().any(|order| order.id == placed.id),
            "placed order should be listed"
        );
        assert_eq!(orders.len(), 4);
        assert_eq!(placed.status, ParentOrderStatus::InProgress);
        assert!(session.cart().is_empty(), "checkout should empty the cart");

        Ok(())
    }

    #[tokio::test]
    async fn placed_order_can_be_looked_up() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut session = Session::start(context()?, dir.path().join("preferences.json"))?;

        let cod = session
            .context()
            .products
            .get_product("pacific-cod".into())
            .await?;
        session.add_offer_line_item(&cod, 3, rust_decimal::Decimal::from(50));

        let placed = session.checkout(PaymentMethod::BankTransfer).await?;
        let found = session.context().orders.parent_order(placed.id.clone()).await?;

        assert_eq!(found, placed);

        Ok(())
    }

    #[test]
    fn end_persists_preferences_but_not_the_cart() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("preferences.json");

        let mut session = Session::start(context()?, path.clone())?;
        session.set_language(Language::Es);
        session.end()?;

        let restarted = Session::start(context()?, path)?;

        assert_eq!(restarted.preferences().language, Language::Es);
        assert!(restarted.cart().is_empty(), "a new session starts empty");

        Ok(())
    }
    #[test]
    fn unchanged_preferences_are_not_written() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("preferences.json");

        let session = Session::start(context()?, path.clone())?;
        session.end()?;

        assert!(!path.exists(), "a read-only session should not write preferences");

        let mut session = Session::start(context()?, path.clone())?;
        session.set_language(Language::default());
        session.end()?;

        assert!(!path.exists(), "re-selecting the current language is not a change");

        Ok(())
    }
}
