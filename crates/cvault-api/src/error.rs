//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    #[error("IO failure: {0}")]
    Io(String),

    #[error("Processing failed: {0}")]
    Processing(#[from] cvault_media::MediaError),

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

impl ApiError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unsupported_media(msg: impl Into<String>) -> Self {
        Self::UnsupportedMedia(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMedia(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Io(_)
            | ApiError::Processing(_)
            | ApiError::Storage(_)
            | ApiError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<cvault_storage::StorageError> for ApiError {
    fn from(e: cvault_storage::StorageError) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<cvault_db::DbError> for ApiError {
    fn from(e: cvault_db::DbError) -> Self {
        match e {
            cvault_db::DbError::NotFound(id) => Self::NotFound(format!("video {}", id)),
            other => Self::Storage(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal causes (subprocess command lines, store diagnostics) go
        // to the log; untrusted callers get the category only.
        let detail = if self.is_internal() {
            // Debug formatting keeps subprocess stderr and exit codes.
            error!("request failed: {:?}", self);
            if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                "An internal error occurred".to_string()
            } else {
                self.to_string()
            }
        } else {
            self.to_string()
        };

        let body = ErrorResponse { detail };

        (status, Json(body)).into_response()
    }
}
