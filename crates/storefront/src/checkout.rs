//! Order checkout: validation and normalization.
//!
//! [`prepare_order`] is a pure function from raw form fields plus a cart
//! snapshot to either a set of field-level errors or a ready-to-send
//! [`OrderRequest`]. All I/O (the API call, clearing the session cart, the
//! redirect) stays in the route handler, so this module is testable without
//! a server.
//!
//! An `OrderRequest` leaves this module only when validation produced zero
//! errors.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use fast_pizza_core::{Cart, Position};
use regex::Regex;
use serde::Deserialize;

use crate::services::restaurant::OrderRequest;

/// International phone format: a leading `+`, then 6 to 14 digits each
/// optionally followed by a single space, ending in a digit.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+(?:[0-9] ?){6,14}[0-9]$").expect("Invalid phone regex"));

/// Message shown next to the phone input when validation fails.
pub const PHONE_ERROR: &str =
    "Please give us your correct phone number. We might need it to contact you.";

/// Raw order form fields, exactly as posted.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Checkbox: present with value `"true"` only when checked.
    #[serde(default)]
    pub priority: Option<String>,
    /// Hidden input: `"lat,lng"` or empty.
    #[serde(default)]
    pub position: String,
}

/// Field-level validation errors, keyed by input name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    /// Record an error for a field.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The error for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether validation passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether a phone number matches the accepted international format.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Validate and normalize the order form against a cart snapshot.
///
/// The phone number is the only field validated by shape; customer and
/// address are required free text, enforced by the form inputs themselves.
/// The priority checkbox maps `"true"` to `true` and anything else to
/// `false`; a malformed or empty position string normalizes to empty.
///
/// # Errors
///
/// Returns the non-empty [`FormErrors`] when any field fails validation.
/// Nothing has been sent and the cart is untouched in that case.
pub fn prepare_order(form: &OrderForm, cart: &Cart) -> Result<OrderRequest, FormErrors> {
    let mut errors = FormErrors::default();

    if !is_valid_phone(&form.phone) {
        errors.insert("phone", PHONE_ERROR);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let position = form
        .position
        .parse::<Position>()
        .map(|p| p.to_string())
        .unwrap_or_default();

    Ok(OrderRequest {
        customer: form.customer.clone(),
        phone: form.phone.clone(),
        address: form.address.clone(),
        position,
        priority: form.priority.as_deref() == Some("true"),
        cart: cart.items().to_vec(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fast_pizza_core::PizzaId;
    use rust_decimal::Decimal;

    fn sample_cart() -> Cart {
        let mut cart = Cart::default();
        cart.add(PizzaId::new(1), "Margherita", Decimal::new(12, 0));
        cart.add(PizzaId::new(7), "Napoli", Decimal::new(16, 0));
        cart.add(PizzaId::new(1), "Margherita", Decimal::new(12, 0));
        cart
    }

    fn valid_form() -> OrderForm {
        OrderForm {
            customer: "Jonas".to_string(),
            phone: "+998 90 123 45 67".to_string(),
            address: "12 Amir Temur Avenue, Tashkent".to_string(),
            priority: None,
            position: String::new(),
        }
    }

    #[test]
    fn test_phone_accepts_international_formats() {
        for phone in [
            "+998 90 123 45 67",
            "+4915123456789",
            "+1 212 555 0142",
            "+1234567",
        ] {
            assert!(is_valid_phone(phone), "expected valid: {phone}");
        }
    }

    #[test]
    fn test_phone_rejects_malformed_numbers() {
        for phone in [
            "12345",
            "",
            "998 90 123 45 67",
            "+12345",
            "+1234567890123456",
            "+998 90 123 45 67 ",
            "+998-90-123-45-67",
            "+99a 90 123 45 67",
        ] {
            assert!(!is_valid_phone(phone), "expected invalid: {phone}");
        }
    }

    #[test]
    fn test_invalid_phone_yields_field_error() {
        let form = OrderForm {
            phone: "12345".to_string(),
            ..valid_form()
        };
        let errors = prepare_order(&form, &sample_cart()).unwrap_err();
        assert_eq!(errors.get("phone"), Some(PHONE_ERROR));
        assert!(errors.get("address").is_none());
    }

    #[test]
    fn test_prepare_order_snapshots_the_cart() {
        let cart = sample_cart();
        let request = prepare_order(&valid_form(), &cart).unwrap();

        assert_eq!(request.cart, cart.items().to_vec());
        assert_eq!(request.customer, "Jonas");
        assert_eq!(request.phone, "+998 90 123 45 67");
    }

    #[test]
    fn test_priority_checkbox_mapping() {
        let mut form = valid_form();
        assert!(!prepare_order(&form, &sample_cart()).unwrap().priority);

        form.priority = Some("true".to_string());
        assert!(prepare_order(&form, &sample_cart()).unwrap().priority);

        form.priority = Some("on".to_string());
        assert!(!prepare_order(&form, &sample_cart()).unwrap().priority);
    }

    #[test]
    fn test_position_normalization() {
        let mut form = valid_form();
        form.position = "41.31,69.24".to_string();
        assert_eq!(
            prepare_order(&form, &sample_cart()).unwrap().position,
            "41.31,69.24"
        );

        form.position = "not-a-position".to_string();
        assert_eq!(prepare_order(&form, &sample_cart()).unwrap().position, "");

        form.position = String::new();
        assert_eq!(prepare_order(&form, &sample_cart()).unwrap().position, "");
    }
}
