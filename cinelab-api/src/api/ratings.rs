//! Aggregate rating endpoint

use axum::{
    extract::{Path, State},
    Json,
};

use cinelab_common::models::RatingSummary;

use crate::rating::movie_rating;
use crate::AppState;

/// GET /movies/{movie_id}/rating
///
/// Recomputes the aggregate from the review list on every call. An unknown
/// movie id is not an error; it simply has zero matching reviews.
pub async fn get_movie_rating(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Json<RatingSummary> {
    let reviews = state.reviews.lock().await;
    Json(movie_rating(reviews.list(), movie_id))
}
