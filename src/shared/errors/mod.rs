//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Template rendering failures raised by renderer adapters
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Render(RenderError::NotFound(_)) => "TEMPLATE_NOT_FOUND",
            Self::Render(RenderError::Render { .. }) => "TEMPLATE_ERROR",
            Self::Render(RenderError::Task(_)) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("No page at '{0}'")]
    NotFound(String),
}

impl ApiError {
    /// Build the error response, tagging the body with the request ID if known
    #[must_use]
    pub fn into_response_with_request_id(self, request_id: Option<String>) -> Response {
        let (status, code, message) = match &self {
            // Template paths and engine messages stay in the logs.
            ApiError::UseCase(uc_error) => (
                uc_error.status_code(),
                uc_error.error_code(),
                "An unexpected error occurred".to_string(),
            ),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_response_with_request_id(None)
    }
}
