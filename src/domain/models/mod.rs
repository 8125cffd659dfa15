//! Domain Models
//!
//! Value objects describing the pages the website serves.

pub mod page;

pub use page::{Page, RenderedPage};
