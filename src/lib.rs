//! Website
//!
//! Serves the home, about and contact pages of the site, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
