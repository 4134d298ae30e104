//! Application state shared across handlers.

use std::sync::Arc;

use cottonfront_core::Catalog;

use crate::config::StorefrontConfig;
use crate::middleware::SessionLocks;
use crate::services::CartEvents;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns everything that
/// outlives a single request: configuration, the product catalog, the
/// cart change channel and the per-visitor request locks. Per-visitor state
/// lives in the session instead.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart_events: CartEvents,
    session_locks: SessionLocks,
}

impl AppState {
    /// Create a new application state with the built-in catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    /// Create a new application state with a specific catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        let cart_events = CartEvents::new(config.cart_events_capacity);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart_events,
                session_locks: SessionLocks::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart change channel.
    #[must_use]
    pub fn cart_events(&self) -> &CartEvents {
        &self.inner.cart_events
    }

    /// Get a reference to the per-session request locks.
    #[must_use]
    pub fn session_locks(&self) -> &SessionLocks {
        &self.inner.session_locks
    }
}
