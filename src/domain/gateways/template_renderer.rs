//! Template Renderer Gateway
//!
//! Abstract trait defining the contract for turning a named template into HTML.

use async_trait::async_trait;

use crate::shared::errors::RenderError;

/// Renders templates by name with an empty context
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    /// Render the template called `template_name`
    ///
    /// # Errors
    ///
    /// Returns `RenderError::NotFound` if no such template exists, or
    /// `RenderError::Render` if it cannot be compiled or evaluated.
    async fn render(&self, template_name: &str) -> Result<String, RenderError>;
}
