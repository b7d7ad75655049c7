use axum::{
    extract::rejection::{BytesRejection, JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;

/// Errors returned by the item handlers.
///
/// Rendered as `{"detail": "<message>"}` with the matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Item not found")]
    NotFound,
    #[error("Invalid item ID: {}", .0.body_text())]
    InvalidId(#[from] PathRejection),
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedContentType,
    #[error("{}", .0.body_text())]
    UnreadableBody(#[from] BytesRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    /// Maps this error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidId(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidBody(_) | ApiError::UnsupportedContentType => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::UnreadableBody(rejection) => rejection.status(),
            ApiError::Repository(error) => {
                StatusCode::from_u16(repository_error_to_status_code(error))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, detail = %detail, "API error");
        } else {
            tracing::warn!(status = %status, detail = %detail, "API error");
        }

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
