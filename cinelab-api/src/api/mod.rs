//! HTTP API handlers for cinelab-api

use serde::Serialize;

pub mod health;
pub mod movies;
pub mod ratings;
pub mod reviews;

pub use health::health_routes;
pub use movies::{create_movie, list_movies};
pub use ratings::get_movie_rating;
pub use reviews::{create_review, list_reviews};

/// Generic error body for failed requests
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}
