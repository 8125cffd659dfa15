//! Domain Layer
//!
//! Contains the page catalogue and the gateway traits (ports) the
//! application depends on. This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::template_renderer::TemplateRenderer;
pub use models::page::{Page, RenderedPage};
