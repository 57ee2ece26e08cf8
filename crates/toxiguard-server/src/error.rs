//! API error types.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Message returned when the request carries no usable text.
pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was rejected before reaching the model.
    #[error("{0}")]
    BadRequest(String),

    /// The request body could not be read (too large, aborted).
    #[error("{message}")]
    Body { status: StatusCode, message: String },

    /// The inference service failed.
    #[error("{0}")]
    Inference(#[from] toxiguard_core::InferenceError),
}

impl ApiError {
    /// The request had no text, or only whitespace.
    pub fn no_text() -> Self {
        ApiError::BadRequest(NO_TEXT_MESSAGE.to_string())
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Body { status, .. } => *status,
            ApiError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), axum::Json(body)).into_response()
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
