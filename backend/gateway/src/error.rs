//! Mapping of service errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geoforge_core::GeoError;
use serde_json::json;
use tracing::error;

/// Error returned by gateway handlers.
#[derive(Debug)]
pub enum ApiError {
    /// CORS preflight; answered with an empty 403.
    Preflight,
    Geo(GeoError),
}

impl From<GeoError> for ApiError {
    fn from(err: GeoError) -> Self {
        ApiError::Geo(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::Preflight => return StatusCode::FORBIDDEN.into_response(),
            ApiError::Geo(err) => err,
        };

        if !err.is_client_error() {
            error!(error = %err, "Analysis error");
        }

        let (status, body) = match &err {
            GeoError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            GeoError::AccessDenied(message) => (
                StatusCode::FORBIDDEN,
                json!({ "error": "Access denied", "message": message }),
            ),
            GeoError::MissingImage => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "No image provided" }),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Analysis failed", "message": other.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
