//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers that can fail return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::geocode::GeocodeError;
use crate::services::restaurant::RestaurantApiError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Restaurant API operation failed.
    #[error("Restaurant API error: {0}")]
    Restaurant(#[from] RestaurantApiError),

    /// Reverse-geocoding failed.
    #[error("Geocoding error: {0}")]
    Geocode(#[from] GeocodeError),

    /// Session read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry; a missing order or a bad
        // request is not an incident.
        if matches!(
            self,
            Self::Restaurant(
                RestaurantApiError::Http(_)
                    | RestaurantApiError::Api { .. }
                    | RestaurantApiError::Decode(_)
            ) | Self::Session(_)
                | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Restaurant(RestaurantApiError::OrderNotFound(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Restaurant(_) | Self::Geocode(_) => StatusCode::BAD_GATEWAY,
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Restaurant(RestaurantApiError::OrderNotFound(id)) => {
                format!("No order found with ID {id}")
            }
            Self::Restaurant(_) | Self::Geocode(_) => "External service error".to_string(),
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order A203".to_string());
        assert_eq!(err.to_string(), "Not found: order A203");

        let err = AppError::BadRequest("unknown pizza".to_string());
        assert_eq!(err.to_string(), "Bad request: unknown pizza");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Restaurant(RestaurantApiError::OrderNotFound(
                "A203".to_string()
            ))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Restaurant(RestaurantApiError::Api {
                status: 500,
                message: "boom".to_string()
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_keeps_order_id() {
        let response = AppError::Restaurant(RestaurantApiError::OrderNotFound(
            "A203".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
