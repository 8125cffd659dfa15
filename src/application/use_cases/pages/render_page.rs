//! Render Page Use Case
//!
//! Renders the template bound to a page.

use std::sync::Arc;

use crate::domain::gateways::TemplateRenderer;
use crate::domain::models::page::{Page, RenderedPage};
use crate::shared::errors::UseCaseError;

/// Use case for rendering a page
pub struct RenderPageUseCase {
    template_renderer: Arc<dyn TemplateRenderer>,
}

impl RenderPageUseCase {
    /// Create a new RenderPageUseCase
    #[must_use]
    pub fn new(template_renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { template_renderer }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Render` if the page's template is missing or
    /// fails to render.
    pub async fn execute(&self, page: Page) -> Result<RenderedPage, UseCaseError> {
        let template = page.template_name();
        tracing::debug!(%page, template, "Rendering page");

        let html = self
            .template_renderer
            .render(template)
            .await
            .map_err(|e| {
                tracing::error!(%page, template, error = ?e, "Failed to render page");
                UseCaseError::from(e)
            })?;

        tracing::debug!(%page, bytes = html.len(), "Page rendered");
        Ok(RenderedPage::new(page, html))
    }
}
