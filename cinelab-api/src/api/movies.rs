//! Movie endpoints
//!
//! Movies are create-and-list only; there is no update or delete.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use cinelab_common::models::{Movie, NewMovie};

use crate::api::StatusResponse;
use crate::AppState;

/// POST /movies
///
/// Assigns the next id, appends to the store, and rewrites the snapshot
/// file before responding. A persistence failure surfaces as a 500.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(body): Json<NewMovie>,
) -> Result<Json<Movie>, (StatusCode, Json<StatusResponse>)> {
    let mut movies = state.movies.lock().await;

    match movies.create(body.into_movie()) {
        Ok(movie) => {
            info!("Created movie {} ({})", movie.id, movie.title);
            Ok(Json(movie))
        }
        Err(e) => {
            error!("Failed to persist movie: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    status: format!("error: {}", e),
                }),
            ))
        }
    }
}

/// GET /movies
///
/// Full movie list in creation order. No pagination, no filtering.
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let movies = state.movies.lock().await;
    Json(movies.list().to_vec())
}
