//! Menu route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use fast_pizza_core::Cart;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::session::{load_cart, load_user};
use crate::routes::cart::format_price;
use crate::services::restaurant::MenuItem;
use crate::state::AppState;

/// Menu item display data for templates.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
    pub price: String,
    pub image_url: String,
    pub sold_out: bool,
    /// How many of this pizza are already in the cart.
    pub in_cart: u32,
}

impl MenuItemView {
    fn new(item: &MenuItem, cart: &Cart) -> Self {
        Self {
            id: item.id.as_i32(),
            name: item.name.clone(),
            ingredients: item.ingredients.join(", "),
            price: format_price(item.unit_price),
            image_url: item.image_url.clone(),
            sold_out: item.sold_out,
            in_cart: cart.quantity_of(item.id),
        }
    }
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub items: Vec<MenuItemView>,
    pub username: String,
}

/// Display the menu.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<MenuTemplate> {
    let menu = state.restaurant().get_menu().await?;
    let cart = load_cart(&session).await;
    let username = load_user(&session).await.username;

    Ok(MenuTemplate {
        items: menu
            .iter()
            .map(|item| MenuItemView::new(item, &cart))
            .collect(),
        username,
    })
}
