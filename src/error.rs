// Error handling module for the Pricing API
// Provides centralized error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

/// Main error type for the API
///
/// Order submission has exactly two client-visible failures: a malformed
/// order (400) and an order the service will not answer (404).
#[derive(Debug)]
pub enum ApiError {
    /// Order failed validation
    /// Maps to HTTP 400 Bad Request with field-level details
    MalformedOrder(validator::ValidationErrors),

    /// Request body could not be decoded into an order
    /// Maps to HTTP 400 Bad Request
    MalformedBody(String),

    /// Valid order that will not be quoted, either because it cannot be
    /// processed or because order taking is disabled. The reason is not
    /// disclosed.
    /// Maps to HTTP 404 Not Found
    NotAccepted,
}

/// Consistent error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR", "NOT_ACCEPTED")
    pub error_code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional field-level details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// ISO 8601 timestamp of when the error occurred
    pub timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::MalformedOrder(errors) => {
                debug!("Order validation failed: {:?}", errors);

                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error_code: "VALIDATION_ERROR".to_string(),
                        message: "reject request".to_string(),
                        details: Some(
                            serde_json::to_value(errors).unwrap_or(serde_json::json!({})),
                        ),
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::MalformedBody(reason) => {
                debug!("Malformed request body: {}", reason);

                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error_code: "MALFORMED_BODY".to_string(),
                        message: "reject request".to_string(),
                        details: Some(serde_json::json!({ "reason": reason })),
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::NotAccepted => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error_code: "NOT_ACCEPTED".to_string(),
                    message: "cannot answer".to_string(),
                    details: None,
                    timestamp: Utc::now().to_rfc3339(),
                },
            ),
        }
    }
}

/// Convert validator errors to ApiError
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::MalformedOrder(errors)
    }
}

/// Convert JSON extraction failures to ApiError
impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}
