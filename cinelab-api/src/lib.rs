//! cinelab-api library - movie review backend
//!
//! Owns the movie and review snapshot stores, the sentiment classifier
//! client, and the HTTP API exposing them.

use std::sync::Arc;

use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod rating;
pub mod sentiment;
pub mod store;

use cinelab_common::models::{Movie, Review};
use sentiment::SentimentClient;
use store::SnapshotStore;

/// Application state shared across HTTP handlers
///
/// Each store sits behind its own mutex; holding the lock across id
/// assignment, the in-memory append, and the file rewrite keeps concurrent
/// creations from racing on the next id.
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<Mutex<SnapshotStore<Movie>>>,
    pub reviews: Arc<Mutex<SnapshotStore<Review>>>,
    pub classifier: SentimentClient,
}

impl AppState {
    /// Create new application state
    pub fn new(
        movies: SnapshotStore<Movie>,
        reviews: SnapshotStore<Review>,
        classifier: SentimentClient,
    ) -> Self {
        Self {
            movies: Arc::new(Mutex::new(movies)),
            reviews: Arc::new(Mutex::new(reviews)),
            classifier,
        }
    }
}

/// Build application router
///
/// CORS is permissive so the browser UI served by cinelab-ui (a different
/// origin) can call these endpoints directly.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/movies", get(api::list_movies).post(api::create_movie))
        .route("/reviews", get(api::list_reviews).post(api::create_review))
        .route("/movies/:movie_id/rating", get(api::get_movie_rating))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
