//! Client configuration endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Configuration handed to the browser application
#[derive(Debug, Serialize)]
pub struct ClientConfig {
    pub api_base_url: String,
}

/// GET /config
///
/// Tells the browser where the cinelab-api service lives.
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(ClientConfig {
        api_base_url: state.api_base_url.clone(),
    })
}
