//! Reverse-geocoding client.
//!
//! Turns browser-supplied coordinates into a human-readable delivery
//! address via a BigDataCloud-style `reverse-geocode-client` endpoint. A
//! failure here only degrades the order form (the address field stays
//! manual); it never blocks submission.

use fast_pizza_core::Position;
use serde::Deserialize;
use thiserror::Error;

use crate::config::StorefrontConfig;

/// Errors that can occur during reverse geocoding.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Client for the reverse-geocoding service.
#[derive(Clone)]
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
}

/// The subset of the reverse-geocode response we use.
#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    locality: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    postcode: String,
    #[serde(default, rename = "countryName")]
    country_name: String,
}

impl GeocodeClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.geocode_api_url.clone(),
        }
    }

    /// Resolve a position into a display address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    pub async fn reverse_geocode(&self, position: Position) -> Result<String, GeocodeError> {
        let url = format!(
            "{}/data/reverse-geocode-client?latitude={}&longitude={}&localityLanguage=en",
            self.base_url, position.latitude, position.longitude
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let geo: ReverseGeocodeResponse = response.json().await?;
        Ok(format_address(&geo))
    }
}

/// Join the non-empty location parts into `"locality, city postcode, country"`.
fn format_address(geo: &ReverseGeocodeResponse) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !geo.locality.is_empty() {
        parts.push(geo.locality.clone());
    }

    let city_line = match (geo.city.is_empty(), geo.postcode.is_empty()) {
        (false, false) => format!("{} {}", geo.city, geo.postcode),
        (false, true) => geo.city.clone(),
        (true, false) => geo.postcode.clone(),
        (true, true) => String::new(),
    };
    if !city_line.is_empty() {
        parts.push(city_line);
    }

    if !geo.country_name.is_empty() {
        parts.push(geo.country_name.clone());
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address_full() {
        let geo = ReverseGeocodeResponse {
            locality: "Mirzo Ulugbek".to_string(),
            city: "Tashkent".to_string(),
            postcode: "100170".to_string(),
            country_name: "Uzbekistan".to_string(),
        };
        assert_eq!(
            format_address(&geo),
            "Mirzo Ulugbek, Tashkent 100170, Uzbekistan"
        );
    }

    #[test]
    fn test_format_address_skips_empty_parts() {
        let geo = ReverseGeocodeResponse {
            locality: String::new(),
            city: "Tashkent".to_string(),
            postcode: String::new(),
            country_name: "Uzbekistan".to_string(),
        };
        assert_eq!(format_address(&geo), "Tashkent, Uzbekistan");
    }

    #[test]
    fn test_format_address_all_empty() {
        let geo = ReverseGeocodeResponse {
            locality: String::new(),
            city: String::new(),
            postcode: String::new(),
            country_name: String::new(),
        };
        assert_eq!(format_address(&geo), "");
    }
}
