//! Session-stored state.
//!
//! The cart and the user profile are the only things this application
//! persists, and both live in the session. Helpers here keep the
//! serialization keys in one place.

use fast_pizza_core::{Cart, Position};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Session-stored user profile.
///
/// Holds the visitor's name plus the result of the last address lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Name entered on the home page; shown in the header and prefilled
    /// into the order form.
    pub username: String,
    /// Address resolved from geolocation, if any.
    pub address: Option<String>,
    /// Position captured by the browser, if any.
    pub position: Option<Position>,
    /// State of the last fetch-address action.
    pub address_status: AddressStatus,
    /// Error message from a failed address lookup.
    pub address_error: Option<String>,
}

/// Lifecycle of the fetch-address action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Session keys for stored state.
pub mod keys {
    /// Key for the cart.
    pub const CART: &str = "cart";

    /// Key for the user profile.
    pub const USER: &str = "user";
}

/// Load the session cart, defaulting to empty.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart to the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Load the user profile, defaulting to an anonymous one.
pub async fn load_user(session: &Session) -> UserProfile {
    session
        .get::<UserProfile>(keys::USER)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the user profile to the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn save_user(
    session: &Session,
    user: &UserProfile,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::USER, user).await
}
