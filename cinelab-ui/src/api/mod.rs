//! HTTP handlers for cinelab-ui

pub mod client_config;
pub mod health;
pub mod ui;

pub use client_config::client_config;
pub use health::health_routes;
pub use ui::{serve_app_js, serve_css, serve_index};
