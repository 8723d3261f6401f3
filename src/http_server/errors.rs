//! # API Errors
//!
//! Every failure is returned to the caller; nothing is logged and swallowed.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldViolation, ValidationError};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not JSON, or not sent as JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Query string could not be parsed
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Body failed its schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store unavailable or failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A validated record could not be encoded
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(StoreError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQueryParam(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Field-level failures, present for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        let error = err.to_string();
        let details = match err {
            ApiError::Validation(validation) => Some(validation.violations),
            _ => None,
        };
        Self { error, code, details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "REQUEST_FAILED");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "REQUEST_REJECTED");
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
