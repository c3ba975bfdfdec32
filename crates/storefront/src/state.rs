//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{GeocodeClient, RestaurantClient};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the external
/// service clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    restaurant: RestaurantClient,
    geocoder: GeocodeClient,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let restaurant = RestaurantClient::new(&config);
        let geocoder = GeocodeClient::new(&config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                restaurant,
                geocoder,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the restaurant API client.
    #[must_use]
    pub fn restaurant(&self) -> &RestaurantClient {
        &self.inner.restaurant
    }

    /// Get a reference to the reverse-geocoding client.
    #[must_use]
    pub fn geocoder(&self) -> &GeocodeClient {
        &self.inner.geocoder
    }
}
