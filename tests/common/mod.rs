//! Common test utilities for e2e tests
//!
//! Builds the application router over a template directory so requests can be
//! driven through it without binding a socket.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::Deserialize;
use tower::util::ServiceExt;

use website::application::use_cases::pages::RenderPageUseCase;
use website::domain::gateways::TemplateRenderer;
use website::infrastructure::driven_adapters::template_renderer::FileSystemTemplateRenderer;
use website::infrastructure::driving_adapters::web::{build_router, AppState};

/// Template directory shipped with the crate
pub fn shipped_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// A directory that contains no templates at all
pub fn missing_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/does-not-exist")
}

/// Templates whose `extends` parent is absent
pub fn orphaned_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/orphaned")
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub template_dir: PathBuf,
}

/// A fully-read HTTP response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}

impl TestApp {
    /// Create a test application serving the shipped templates
    pub fn new() -> Self {
        Self::with_template_dir(shipped_templates_dir())
    }

    /// Create a test application serving templates from `dir`
    pub fn with_template_dir(dir: PathBuf) -> Self {
        let template_renderer = Arc::new(FileSystemTemplateRenderer::new(&dir));
        let render_page_use_case = Arc::new(RenderPageUseCase::new(template_renderer));
        let router = build_router(AppState::new(render_page_use_case));

        Self {
            router,
            template_dir: dir,
        }
    }

    /// Render `template_name` directly, bypassing HTTP
    pub async fn render_directly(&self, template_name: &str) -> String {
        FileSystemTemplateRenderer::new(&self.template_dir)
            .render(template_name)
            .await
            .unwrap()
    }

    /// Send a GET request to `uri`
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Send an arbitrary request
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Error response body returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
