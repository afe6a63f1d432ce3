use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub const NOT_CONFIGURED_MESSAGE: &str = "FPL API URL not configured";
pub const UPSTREAM_FAILED_MESSAGE: &str = "Failed to fetch FPL data";

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
    /// Upstream base URL is absent from the configuration.
    NotConfigured,
    /// Upstream request failed; details are logged where it happened.
    UpstreamFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                NOT_CONFIGURED_MESSAGE.to_string(),
            ),
            ApiError::UpstreamFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_FAILED_MESSAGE.to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalError(format!("JSON error: {}", err))
    }
}

impl From<picks_core::PicksError> for ApiError {
    fn from(err: picks_core::PicksError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;
