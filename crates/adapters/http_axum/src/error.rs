//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use chainwatch_domain::error::ConsoleError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ConsoleError`] to an HTTP response with appropriate status code.
pub struct ApiError(ConsoleError);

impl From<ConsoleError> for ApiError {
    fn from(err: ConsoleError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ConsoleError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ConsoleError::Command(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ConsoleError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        };
        tracing::debug!(status = status.as_u16(), error = %message, "request refused");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
