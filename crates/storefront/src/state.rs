//! Application state shared across handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::future::Cache;
use moka::notification::RemovalCause;

use fungi_fresh_core::{Catalog, Order};

use crate::config::StorefrontConfig;
use crate::content::{self, ContentError};
use crate::shopper::{ShopperHandle, ShopperKey};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the order history and every live shopper store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    orders: Vec<Order>,
    shoppers: Cache<ShopperKey, ShopperHandle>,
    evicted_for_capacity: Arc<AtomicU64>,
}

impl AppState {
    /// Create application state, loading content from the configured directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or order history cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self, ContentError> {
        let catalog = content::load_catalog(&config.content_dir)?;
        let orders = content::load_orders(&config.content_dir)?;
        Ok(Self::from_parts(config, catalog, orders))
    }

    /// Create application state from already-loaded content.
    #[must_use]
    pub fn from_parts(config: StorefrontConfig, catalog: Catalog, orders: Vec<Order>) -> Self {
        let evicted_for_capacity = Arc::new(AtomicU64::new(0));
        let evicted = Arc::clone(&evicted_for_capacity);

        // Idle shoppers are dropped together with their session. Capacity
        // evictions drop a live basket, so they are reported.
        let shoppers = Cache::builder()
            .max_capacity(config.max_shoppers)
            .time_to_idle(config.session_idle)
            .eviction_listener(move |key: Arc<ShopperKey>, _, cause| {
                if cause == RemovalCause::Size {
                    evicted.fetch_add(1, Ordering::Relaxed);
                    tracing::warn!(
                        shopper = %key,
                        "Shopper evicted at capacity, basket discarded"
                    );
                }
            })
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                orders,
                shoppers,
                evicted_for_capacity,
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

    /// Get the mock order history.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.inner.orders
    }

    /// Get the store for `key`, creating an empty one on first use.
    pub async fn shopper(&self, key: ShopperKey) -> ShopperHandle {
        self.inner
            .shoppers
            .get_with(key, async move {
                tracing::debug!(shopper = %key, "New shopper");
                ShopperHandle::new(key)
            })
            .await
    }

    /// Number of shoppers dropped because the store limit was reached.
    #[must_use]
    pub fn evicted_shoppers(&self) -> u64 {
        self.inner.evicted_for_capacity.load(Ordering::Relaxed)
    }
}
