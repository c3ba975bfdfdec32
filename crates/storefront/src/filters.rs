//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Format a decimal amount as a euro price.
///
/// Usage in templates: `{{ cart.subtotal|format_currency }}`
#[askama::filter_fn]
pub fn format_currency(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("€{amount:.2}"))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
