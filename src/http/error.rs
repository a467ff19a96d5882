//! HTTP error mapping
//!
//! Three tiers: client mistakes (400), unknown routes (404), and anything
//! else (500). The 500 body never carries internal detail; that goes to
//! the log.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ValidationError;

use super::envelope::ApiResponse;

pub const INTERNAL_ERROR_MESSAGE: &str = "Terjadi kesalahan internal pada server";
pub const NOT_FOUND_MESSAGE: &str = "Endpoint tidak ditemukan";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("No route for {0}")]
    NotFound(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(ValidationError::MissingField(_))
            | ApiError::Validation(ValidationError::InvalidNumeric { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Validation(ValidationError::UnsupportedValue { .. })
            | ApiError::MalformedBody(_)
            | ApiError::UnsupportedMediaType(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message placed in the response envelope
    pub fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::BAD_REQUEST => self.to_string(),
            StatusCode::NOT_FOUND => NOT_FOUND_MESSAGE.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Validation(ValidationError::InvalidNumeric { field }) => {
                tracing::debug!(field = *field, "Rejected non-numeric value");
            }
            ApiError::Validation(ValidationError::MissingField(field)) => {
                tracing::debug!(field = *field, "Rejected request with missing field");
            }
            ApiError::NotFound(path) => {
                tracing::debug!(path = %path, "No route");
            }
            _ => {
                tracing::error!(error = %self, "Request failed");
            }
        }
        (status, Json(ApiResponse::error(self.public_message()))).into_response()
    }
}

/// Convert a handler panic into a 500 envelope
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::error(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
