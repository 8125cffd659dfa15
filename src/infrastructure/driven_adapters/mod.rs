//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Template rendering from the file system
//! - Configuration

pub mod config;
pub mod template_renderer;

pub use config::AppConfig;
pub use template_renderer::FileSystemTemplateRenderer;
