//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP handlers serving the website pages

pub mod web;
