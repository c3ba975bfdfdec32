//! Order route handlers.
//!
//! The submission flow is deliberately split: `checkout::prepare_order`
//! does validation and normalization as a pure function, and `create` does
//! the I/O around it. The cart is cleared only after the API accepts the
//! order; any earlier exit leaves it untouched.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::HeaderMap,
    http::header::REFERER,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use fast_pizza_core::Cart;
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::checkout::{self, OrderForm};
use crate::error::Result;
use crate::filters;
use crate::models::UserProfile;
use crate::models::session::{load_cart, load_user, save_cart};
use crate::routes::cart::{CartItemView, CartView, EmptyCartTemplate, format_price};
use crate::services::restaurant::Order;
use crate::state::AppState;

/// Surcharge for priority orders, as a fraction of the cart total.
const PRIORITY_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1); // 0.2

/// Order form page template.
///
/// Also re-rendered on failed validation, with the entered values and the
/// field errors filled in. Empty strings mean "no value" so the template
/// can stay free of `Option` plumbing.
#[derive(Template, WebTemplate)]
#[template(path = "order/new.html")]
pub struct OrderFormTemplate {
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub position: String,
    pub has_position: bool,
    pub phone_error: String,
    pub address_error: String,
    pub cart: CartView,
    pub total: String,
    pub priority_total: String,
}

/// Order confirmation / lookup view template.
#[derive(Template, WebTemplate)]
#[template(path = "order/show.html")]
pub struct OrderShowTemplate {
    pub id: String,
    pub status: String,
    pub priority: bool,
    pub minutes_left: i64,
    pub estimated_delivery: String,
    pub items: Vec<CartItemView>,
    pub order_price: String,
    pub priority_price: String,
    pub total_price: String,
}

impl From<&Order> for OrderShowTemplate {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            status: order.status.clone(),
            priority: order.priority,
            minutes_left: (order.estimated_delivery - Utc::now()).num_minutes(),
            estimated_delivery: order
                .estimated_delivery
                .format("%b %e, %Y %H:%M")
                .to_string(),
            items: order.cart.iter().map(CartItemView::from).collect(),
            order_price: format_price(order.order_price),
            priority_price: format_price(order.priority_price),
            total_price: format_price(order.order_price + order.priority_price),
        }
    }
}

/// Header search form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

fn order_form_template(
    user: &UserProfile,
    form: &OrderForm,
    cart: &Cart,
    errors: &checkout::FormErrors,
) -> OrderFormTemplate {
    let total = cart.total_price();
    OrderFormTemplate {
        customer: form.customer.clone(),
        phone: form.phone.clone(),
        address: form.address.clone(),
        position: form.position.clone(),
        has_position: !form.position.is_empty(),
        phone_error: errors.get("phone").unwrap_or_default().to_string(),
        address_error: user.address_error.clone().unwrap_or_default(),
        cart: CartView::from(cart),
        total: format_price(total),
        priority_total: format_price(total + total * PRIORITY_RATE),
    }
}

/// Display the order form, prefilled from the user profile.
#[instrument(skip(session))]
pub async fn new_order(session: Session) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return EmptyCartTemplate.into_response();
    }

    let user = load_user(&session).await;
    let form = OrderForm {
        customer: user.username.clone(),
        address: user.address.clone().unwrap_or_default(),
        position: user.position.map(|p| p.to_string()).unwrap_or_default(),
        ..OrderForm::default()
    };

    order_form_template(&user, &form, &cart, &checkout::FormErrors::default()).into_response()
}

/// Submit an order.
///
/// Validation failure re-renders the form with field errors; nothing is
/// sent and the cart is untouched. On success the order is created, the
/// cart cleared, and the client redirected to the confirmation view. An API
/// failure propagates before the cart is touched.
#[instrument(skip(state, session, form), fields(customer = %form.customer))]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<OrderForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await;
    if cart.is_empty() {
        return Ok(EmptyCartTemplate.into_response());
    }

    let request = match checkout::prepare_order(&form, &cart) {
        Ok(request) => request,
        Err(errors) => {
            let user = load_user(&session).await;
            return Ok(order_form_template(&user, &form, &cart, &errors).into_response());
        }
    };

    let order = state.restaurant().create_order(&request).await?;
    tracing::info!(order_id = %order.id, priority = order.priority, "order created");

    cart.clear();
    save_cart(&session, &cart).await?;

    Ok(Redirect::to(&format!("/order/{}", urlencoding::encode(&order.id))).into_response())
}

/// Display one order (confirmation after checkout, or a search hit).
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<OrderShowTemplate> {
    let order = state.restaurant().get_order(&id).await?;
    Ok(OrderShowTemplate::from(&order))
}

/// Header search: redirect to the order view for a non-empty query.
///
/// An empty query goes back where it came from; the destination view is
/// responsible for resolving the query, so no shape validation happens
/// here.
#[instrument(skip(headers))]
pub async fn search(headers: HeaderMap, Form(form): Form<SearchForm>) -> Redirect {
    let query = form.query.trim();
    if query.is_empty() {
        let back = headers
            .get(REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("/");
        return Redirect::to(back);
    }

    Redirect::to(&format!("/order/{}", urlencoding::encode(query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rate_is_twenty_percent() {
        assert_eq!(PRIORITY_RATE, Decimal::new(2, 1));
        assert_eq!(Decimal::from(100) * PRIORITY_RATE, Decimal::from(20));
    }
}
