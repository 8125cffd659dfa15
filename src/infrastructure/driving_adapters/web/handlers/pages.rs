//! Page Handlers
//!
//! Each handler renders one fixed template. The request itself is not
//! inspected beyond its request ID.

use axum::{
    extract::{Request, State},
    response::{Html, IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};

use crate::domain::models::page::Page;
use crate::infrastructure::driving_adapters::web::middleware::request_id::RequestId;
use crate::infrastructure::driving_adapters::web::AppState;
use crate::shared::errors::ApiError;

/// Create the router for page endpoints
///
/// Pages answer on their canonical route and on the same route without a
/// trailing slash.
pub fn router() -> Router<AppState> {
    Page::ALL.into_iter().fold(Router::new(), |router, page| {
        let handler = page_handler(page);
        let router = router.route(page.route(), handler.clone());

        match page.route().strip_suffix('/') {
            Some(bare) if !bare.is_empty() => router.route(bare, handler),
            _ => router,
        }
    })
}

fn page_handler(page: Page) -> MethodRouter<AppState> {
    match page {
        Page::Home => get(home),
        Page::About => get(about),
        Page::Contact => get(contact),
    }
}

/// GET / - Home page
///
/// # Responses
///
/// * 200 OK - Rendered `website/index.html`
/// * 500 Internal Server Error - Template missing or not renderable
pub async fn home(State(state): State<AppState>, request: Request) -> Response {
    render_page(&state, Page::Home, request_id(&request)).await
}

/// GET /about/ - About page
///
/// # Responses
///
/// * 200 OK - Rendered `website/about.html`
/// * 500 Internal Server Error - Template missing or not renderable
pub async fn about(State(state): State<AppState>, request: Request) -> Response {
    render_page(&state, Page::About, request_id(&request)).await
}

/// GET /contact/ - Contact page
///
/// # Responses
///
/// * 200 OK - Rendered `website/contact.html`
/// * 500 Internal Server Error - Template missing or not renderable
pub async fn contact(State(state): State<AppState>, request: Request) -> Response {
    render_page(&state, Page::Contact, request_id(&request)).await
}

fn request_id(request: &Request) -> Option<String> {
    RequestId::from_request(request).map(|id| id.to_string())
}

async fn render_page(state: &AppState, page: Page, request_id: Option<String>) -> Response {
    match state.render_page_use_case.execute(page).await {
        Ok(rendered) => {
            tracing::debug!(page = %rendered.page, "Serving page");
            Html(rendered.html).into_response()
        }
        Err(e) => ApiError::from(e).into_response_with_request_id(request_id),
    }
}
