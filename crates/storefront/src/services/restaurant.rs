//! Restaurant order API client.
//!
//! A plain JSON-over-HTTP client built on `reqwest`. The API wraps every
//! response in a `{ "status": ..., "data": ... }` envelope. The menu is
//! cached in-memory via `moka` with a short TTL; orders are never cached.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use fast_pizza_core::{CartItem, PizzaId};
use moka::future::Cache;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::StorefrontConfig;

/// Menu cache TTL. The menu changes on the order of days, but a stale
/// sold-out flag is annoying, so keep it short.
const MENU_CACHE_TTL: Duration = Duration::from_secs(60);

/// Errors that can occur when talking to the restaurant API.
#[derive(Debug, Error)]
pub enum RestaurantApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Order not found.
    #[error("No order found with ID {0}")]
    OrderNotFound(String),

    /// Failed to decode a response body.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// Wire Types
// =============================================================================

/// Response envelope used by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// A pizza on the menu.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: PizzaId,
    pub name: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub sold_out: bool,
    #[serde(default)]
    pub image_url: String,
}

/// The payload submitted to create an order.
///
/// Construction goes through [`crate::checkout::prepare_order`], which is
/// the only place allowed to build one; that keeps the "validated before
/// sent" invariant in a single spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub customer: String,
    pub phone: String,
    pub address: String,
    /// `"lat,lng"`, or empty when the position was never resolved.
    pub position: String,
    pub priority: bool,
    pub cart: Vec<CartItem>,
}

/// An order as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub address: String,
    pub status: String,
    pub priority: bool,
    pub estimated_delivery: DateTime<Utc>,
    #[serde(default)]
    pub cart: Vec<CartItem>,
    pub order_price: Decimal,
    #[serde(default)]
    pub priority_price: Decimal,
}

// =============================================================================
// RestaurantClient
// =============================================================================

/// Client for the restaurant order API.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: Arc<RestaurantClientInner>,
}

struct RestaurantClientInner {
    client: reqwest::Client,
    base_url: String,
    menu_cache: Cache<String, Arc<Vec<MenuItem>>>,
}

impl RestaurantClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let menu_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(MENU_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(RestaurantClientInner {
                client: reqwest::Client::new(),
                base_url: config.restaurant_api_url.clone(),
                menu_cache,
            }),
        }
    }

    /// Fetch the menu, serving from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn get_menu(&self) -> Result<Arc<Vec<MenuItem>>, RestaurantApiError> {
        if let Some(menu) = self.inner.menu_cache.get("menu").await {
            tracing::debug!("menu served from cache");
            return Ok(menu);
        }

        let url = format!("{}/menu", self.inner.base_url);
        let menu: Vec<MenuItem> = Self::fetch_json(self.inner.client.get(&url)).await?;
        let menu = Arc::new(menu);

        self.inner
            .menu_cache
            .insert("menu".to_string(), Arc::clone(&menu))
            .await;

        Ok(menu)
    }

    /// Fetch one order by ID.
    ///
    /// # Errors
    ///
    /// Returns [`RestaurantApiError::OrderNotFound`] for an unknown ID, or
    /// another variant if the request fails.
    pub async fn get_order(&self, id: &str) -> Result<Order, RestaurantApiError> {
        let url = format!("{}/order/{}", self.inner.base_url, urlencoding::encode(id));
        let response = self.inner.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RestaurantApiError::OrderNotFound(id.to_string()));
        }

        Self::decode(response).await
    }

    /// Create an order.
    ///
    /// No retries: a failure here must leave the caller free to decide what
    /// happens to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API rejects the payload,
    /// or the response cannot be decoded.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<Order, RestaurantApiError> {
        let url = format!("{}/order", self.inner.base_url);
        Self::fetch_json(self.inner.client.post(&url).json(order)).await
    }

    /// Send a request and decode the enveloped response.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, RestaurantApiError> {
        let response = request.send().await?;
        Self::decode(response).await
    }

    /// Decode a response, mapping non-success statuses to `Api` errors.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, RestaurantApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "restaurant API returned non-success status"
            );
            return Err(RestaurantApiError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).inspect_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "failed to decode restaurant API response"
            );
        })?;

        Ok(envelope.data)
    }
}
