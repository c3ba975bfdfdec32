//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /menu                   - Menu listing
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add pizza (returns count badge, triggers cart-updated)
//! POST /cart/update            - Change line quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Orders
//! GET  /order/new              - Order form
//! POST /order                  - Submit order (validate -> create -> redirect)
//! GET  /order/:id              - Order confirmation / lookup view
//! POST /order/search           - Header search (redirect to /order/:id)
//!
//! # Account
//! POST /account/username       - Set the visitor's name
//! POST /account/address        - Fetch-address action (fragment)
//! ```

pub mod account;
pub mod cart;
pub mod home;
pub mod menu;
pub mod order;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(order::create))
        .route("/new", get(order::new_order))
        .route("/search", post(order::search))
        .route("/{id}", get(order::show))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/username", post(account::set_username))
        .route("/address", post(account::fetch_address))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::index))
        .nest("/cart", cart_routes())
        .nest("/order", order_routes())
        .nest("/account", account_routes())
}
