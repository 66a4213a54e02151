//! HTTP error mapping
//!
//! Core failures map onto status codes so callers can tell "no data yet"
//! (200 with an empty body) from an actual failure, and a retryable store
//! outage (503) from a rejected request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use inkmatch_core::Error as CoreError;

/// Handler-level error
#[derive(Debug)]
pub enum ApiError {
    /// Studio route called without the authenticated user id header
    MissingIdentity,
    Core(CoreError),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingIdentity => (
                StatusCode::UNAUTHORIZED,
                "Missing x-user-id header".to_string(),
            ),
            ApiError::Core(err) => {
                let status = match &err {
                    CoreError::NotFound(_) => StatusCode::NOT_FOUND,
                    CoreError::PermissionDenied(_) => StatusCode::FORBIDDEN,
                    CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                    CoreError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    CoreError::Io(_) | CoreError::Config(_) | CoreError::Internal(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                if status.is_server_error() {
                    error!("Request failed: {}", err);
                }
                (status, err.to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
