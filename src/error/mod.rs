//! Centralized API error handling for the Nyumba web gateway
//!
//! This module provides a unified error type for API responses with proper
//! HTTP status code mapping and JSON error responses. Upstream failures are
//! deliberately collapsed into generic payloads: the original cause is logged
//! for operators and never relayed to callers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::client::ClientError;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in the response
#[derive(Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// Get the error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Upstream(_) => "UPSTREAM_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        // Log server errors
        match &self {
            ApiError::Upstream(_) | ApiError::Internal(_) => {
                tracing::error!(error = %message, code = %error_code, "Server error occurred");
            }
            _ => {
                tracing::debug!(error = %message, code = %error_code, "Client error occurred");
            }
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: error_code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Convenience conversions from common error types

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            ClientError::UpstreamStatus(status) => {
                tracing::error!(status = %status, "Backend returned non-success status");
                ApiError::Upstream("The upstream service returned an error".to_string())
            }
            ClientError::Transport(source) => {
                tracing::error!(error = %source, "Backend request failed");
                ApiError::Upstream("The upstream service is unavailable".to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;
