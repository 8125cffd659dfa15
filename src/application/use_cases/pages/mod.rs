//! Page Use Cases

mod render_page;

pub use render_page::RenderPageUseCase;
