//! cinelab-ui library - browser UI for the movie review service
//!
//! Serves the embedded HTML/JS single-page UI plus a small config endpoint
//! telling the browser where the cinelab-api service lives. All data calls
//! go from the browser straight to cinelab-api.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Base URL of the cinelab-api service, handed to the browser
    pub api_base_url: String,
}

impl AppState {
    /// Create new application state
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/cinelab.css", get(api::serve_css))
        .route("/config", get(api::client_config))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
