//! Use Cases
//!
//! Each use case is a single-purpose struct with an execute() method.

pub mod pages;

pub use pages::RenderPageUseCase;
