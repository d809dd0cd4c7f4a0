//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stayhub_domain::error::StayHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`StayHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(StayHubError);

impl From<StayHubError> for ApiError {
    fn from(err: StayHubError) -> Self {
        Self(err)
    }
}

impl From<stayhub_domain::error::ValidationError> for ApiError {
    fn from(err: stayhub_domain::error::ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<stayhub_domain::error::NotFoundError> for ApiError {
    fn from(err: stayhub_domain::error::NotFoundError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StayHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StayHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            StayHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
