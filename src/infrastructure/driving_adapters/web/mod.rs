//! Web Module
//!
//! Contains the page handlers, middleware and router assembly.

pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::pages::RenderPageUseCase;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub render_page_use_case: Arc<RenderPageUseCase>,
}

impl AppState {
    #[must_use]
    pub fn new(render_page_use_case: Arc<RenderPageUseCase>) -> Self {
        Self {
            render_page_use_case,
        }
    }
}

/// Build the application router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    handlers::pages::router()
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(
            middleware::request_id::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
