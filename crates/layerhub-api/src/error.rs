//! Maps domain `AppError` to HTTP responses.
//!
//! Domain errors never carry status codes themselves; this boundary owns
//! the kind → status table. Every domain validation failure surfaces as
//! 422, authentication failures as 403, and an unreachable identity
//! provider as 503.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use layerhub_core::error::{AppError, ErrorKind};
use layerhub_core::types::ApiErrorResponse;

/// Transport-level wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>` so the `?` operator converts
/// domain errors at the boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            ErrorKind::NotFound
            | ErrorKind::AlreadyExists
            | ErrorKind::UnsupportedFileType
            | ErrorKind::MissingUploadSource
            | ErrorKind::ConflictingUploadSource
            | ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Authentication => StatusCode::FORBIDDEN,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %err.message, kind = %err.kind, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
