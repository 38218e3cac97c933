//! Review endpoints
//!
//! Review creation calls the sentiment classifier synchronously and stores
//! its result denormalized on the review. Classifier failure is absorbed:
//! the review is still created with neutral defaults and the caller never
//! sees an error. The referenced movie's existence is not validated, so a
//! review may be orphaned.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info, warn};

use cinelab_common::models::{NewReview, Review};

use crate::api::StatusResponse;
use crate::sentiment::star_rating;
use crate::AppState;

/// POST /reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<NewReview>,
) -> Result<Json<Review>, (StatusCode, Json<StatusResponse>)> {
    // Classifier call happens before the store lock is taken; only the
    // id-assign/append/persist scope needs mutual exclusion.
    let (sentiment_label, sentiment_score, rating) =
        match state.classifier.classify(&body.content).await {
            Ok(result) => {
                let rating = star_rating(&result.label);
                (Some(result.label), result.score, rating)
            }
            Err(e) => {
                warn!("Sentiment classification failed, storing neutral defaults: {}", e);
                (None, 0.0, None)
            }
        };

    let review = Review {
        id: 0,
        movie_id: body.movie_id,
        author: body.author,
        content: body.content,
        sentiment_label,
        sentiment_score,
        rating,
    };

    let mut reviews = state.reviews.lock().await;

    match reviews.create(review) {
        Ok(review) => {
            info!(
                "Created review {} for movie {} (rating: {:?})",
                review.id, review.movie_id, review.rating
            );
            Ok(Json(review))
        }
        Err(e) => {
            error!("Failed to persist review: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse {
                    status: format!("error: {}", e),
                }),
            ))
        }
    }
}

/// GET /reviews
///
/// Full review list in creation order.
pub async fn list_reviews(State(state): State<AppState>) -> Json<Vec<Review>> {
    let reviews = state.reviews.lock().await;
    Json(reviews.list().to_vec())
}
