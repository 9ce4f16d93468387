//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::payments::StripeClient;
use crate::store::{
    MemoryOrderStore, MemoryProductStore, MemoryRecommendationStore, MemoryUserStore, OrderStore,
    ProductStore, RecommendationStore, UserStore,
};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The stores are held as trait objects so the
/// route layer depends on the repository abstraction, not on the in-memory
/// implementation wired up here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductStore>,
    orders: Arc<dyn OrderStore>,
    recommendations: Arc<dyn RecommendationStore>,
    stripe: Option<StripeClient>,
}

impl AppState {
    /// Create application state with fresh in-memory stores.
    ///
    /// The Stripe client is only constructed when a secret key is
    /// configured; without one the payment endpoints answer 500.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let stripe = config.stripe_secret_key.clone().map(StripeClient::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                users: Arc::new(MemoryUserStore::new()),
                products: Arc::new(MemoryProductStore::new()),
                orders: Arc::new(MemoryOrderStore::new()),
                recommendations: Arc::new(MemoryRecommendationStore::new()),
                stripe,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get the user store.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }

    /// Get the product store.
    #[must_use]
    pub fn products(&self) -> &dyn ProductStore {
        self.inner.products.as_ref()
    }

    /// Get the order store.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        self.inner.orders.as_ref()
    }

    /// Get the recommendation store.
    #[must_use]
    pub fn recommendations(&self) -> &dyn RecommendationStore {
        self.inner.recommendations.as_ref()
    }

    /// Get the Stripe client, if payments are configured.
    #[must_use]
    pub fn stripe(&self) -> Option<&StripeClient> {
        self.inner.stripe.as_ref()
    }
}
