//! HTTP Handlers

pub mod pages;

use axum::extract::Request;
use axum::response::Response;

use crate::infrastructure::driving_adapters::web::middleware::request_id::RequestId;
use crate::shared::errors::ApiError;

/// Fallback for paths that match no page
pub async fn not_found(request: Request) -> Response {
    let request_id = RequestId::from_request(&request).map(|id| id.to_string());
    tracing::debug!(uri = %request.uri(), "No page for path");

    ApiError::NotFound(request.uri().path().to_string()).into_response_with_request_id(request_id)
}
