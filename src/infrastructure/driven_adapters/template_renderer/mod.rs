//! Template Renderer Adapters

mod filesystem;

pub use filesystem::FileSystemTemplateRenderer;
