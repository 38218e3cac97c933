//! Per-movie aggregate rating
//!
//! Pure reduction over the review list, recomputed on every request; the
//! aggregate is never stored.

use cinelab_common::models::{RatingSummary, Review};

/// Average the derived ratings of a movie's reviews
///
/// Reviews with an absent rating (unparseable or missing classifier label)
/// are excluded from both the mean and the count. With no rated reviews the
/// summary is `{rating: None, count: 0}`; otherwise the mean is rounded to
/// one decimal place, with ties rounding away from zero (a mean of 6.25
/// becomes 6.3).
pub fn movie_rating(reviews: &[Review], movie_id: i64) -> RatingSummary {
    let ratings: Vec<i64> = reviews
        .iter()
        .filter(|r| r.movie_id == movie_id)
        .filter_map(|r| r.rating)
        .collect();

    if ratings.is_empty() {
        return RatingSummary {
            rating: None,
            count: 0,
        };
    }

    let mean = ratings.iter().sum::<i64>() as f64 / ratings.len() as f64;
    RatingSummary {
        rating: Some((mean * 10.0).round() / 10.0),
        count: ratings.len(),
    }
}
