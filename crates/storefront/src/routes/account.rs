//! User profile route handlers.
//!
//! The profile is session state: a name entered on the home page, plus the
//! result of the last geolocation-to-address lookup. The lookup error state
//! is displayed on the order form but never blocks submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use fast_pizza_core::Position;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::AddressStatus;
use crate::models::session::{load_user, save_user};
use crate::state::AppState;

/// Message shown when the address lookup fails.
const ADDRESS_ERROR: &str =
    "There was a problem getting your address. Make sure to fill this field!";

/// Username form data.
#[derive(Debug, Deserialize)]
pub struct UsernameForm {
    #[serde(default)]
    pub username: String,
}

/// Coordinates posted by the browser's geolocation callback.
#[derive(Debug, Deserialize)]
pub struct FetchAddressForm {
    pub latitude: f64,
    pub longitude: f64,
}

/// Address block fragment (HTMX), swapped into the order form after a
/// fetch-address action.
#[derive(Template, WebTemplate)]
#[template(path = "partials/address_field.html")]
pub struct AddressFieldTemplate {
    pub address: String,
    pub position: String,
    pub has_position: bool,
    pub address_error: String,
}

/// Store the visitor's name and send them to the menu.
#[instrument(skip(session, form), fields(username = %form.username))]
pub async fn set_username(
    session: Session,
    Form(form): Form<UsernameForm>,
) -> Result<Redirect> {
    let username = form.username.trim();
    if username.is_empty() {
        return Ok(Redirect::to("/"));
    }

    let mut user = load_user(&session).await;
    user.username = username.to_string();
    save_user(&session, &user).await?;

    Ok(Redirect::to("/menu"))
}

/// Resolve browser coordinates into a delivery address (HTMX).
///
/// Success stores the address and position in the profile; failure stores
/// the error string. Either way the address field stays editable, so this
/// never blocks an order.
#[instrument(skip(state, session))]
pub async fn fetch_address(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<FetchAddressForm>,
) -> Result<Response> {
    let position = Position::new(form.latitude, form.longitude);
    let mut user = load_user(&session).await;

    let template = match state.geocoder().reverse_geocode(position).await {
        Ok(address) => {
            user.address = Some(address.clone());
            user.position = Some(position);
            user.address_status = AddressStatus::Success;
            user.address_error = None;

            AddressFieldTemplate {
                address,
                position: position.to_string(),
                has_position: true,
                address_error: String::new(),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "address lookup failed");
            user.address_status = AddressStatus::Error;
            user.address_error = Some(ADDRESS_ERROR.to_string());

            AddressFieldTemplate {
                address: user.address.clone().unwrap_or_default(),
                position: user.position.map(|p| p.to_string()).unwrap_or_default(),
                has_position: user.position.is_some(),
                address_error: ADDRESS_ERROR.to_string(),
            }
        }
    };

    save_user(&session, &user).await?;
    Ok(template.into_response())
}
