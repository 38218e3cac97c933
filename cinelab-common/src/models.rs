//! Domain models shared by the Cinelab services
//!
//! These types double as the HTTP wire format and the on-disk snapshot
//! format: both sides are plain serde JSON, so the persisted files always
//! mirror what `GET /movies` and `GET /reviews` return.

use serde::{Deserialize, Serialize};

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Positive integer assigned by the movie store, never reused
    pub id: i64,
    pub title: String,
    /// Free-form string, typically a year
    pub release_date: String,
    pub director: String,
    /// Comma-joined list when the UI multi-select is used
    pub genre: String,
    pub poster_url: String,
}

/// Request body for `POST /movies` (a movie without its id)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewMovie {
    pub title: String,
    pub release_date: String,
    pub director: String,
    pub genre: String,
    pub poster_url: String,
}

impl NewMovie {
    /// Build the stored record; the store assigns the real id.
    pub fn into_movie(self) -> Movie {
        Movie {
            id: 0,
            title: self.title,
            release_date: self.release_date,
            director: self.director,
            genre: self.genre,
            poster_url: self.poster_url,
        }
    }
}

/// A stored review record with its denormalized sentiment result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Positive integer assigned by the review store
    pub id: i64,
    /// Referenced movie; existence is not validated, orphans are allowed
    pub movie_id: i64,
    pub author: String,
    pub content: String,
    /// Raw label returned by the classifier, `None` when classification failed
    pub sentiment_label: Option<String>,
    /// Classifier confidence in [0,1]; 0.0 when classification failed
    pub sentiment_score: f64,
    /// Derived 0-10 star rating; `None` when the label had no star count
    pub rating: Option<i64>,
}

/// Request body for `POST /reviews`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewReview {
    pub movie_id: i64,
    pub author: String,
    pub content: String,
}

/// Response body for `GET /movies/{movie_id}/rating`
///
/// `rating` is the mean of the movie's derived review ratings rounded to
/// one decimal, or `None` when the movie has no rated reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub rating: Option<f64>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_serialization_round_trip() {
        let movie = Movie {
            id: 3,
            title: "Alien".to_string(),
            release_date: "1979".to_string(),
            director: "Ridley Scott".to_string(),
            genre: "SF, Horror".to_string(),
            poster_url: "https://example.com/alien.jpg".to_string(),
        };

        let json = serde_json::to_string(&movie).unwrap();
        let parsed: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, movie);
    }

    #[test]
    fn review_absent_sentiment_serializes_as_null() {
        let review = Review {
            id: 1,
            movie_id: 7,
            author: "anon".to_string(),
            content: "fine".to_string(),
            sentiment_label: None,
            sentiment_score: 0.0,
            rating: None,
        };

        let json = serde_json::to_value(&review).unwrap();
        assert!(json["sentiment_label"].is_null());
        assert!(json["rating"].is_null());
        assert_eq!(json["sentiment_score"], 0.0);
    }

    #[test]
    fn review_zero_rating_is_not_null() {
        let json = r#"{
            "id": 2,
            "movie_id": 7,
            "author": "anon",
            "content": "awful",
            "sentiment_label": "0 stars",
            "sentiment_score": 0.91,
            "rating": 0
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating, Some(0));
    }

    #[test]
    fn new_review_deserializes_from_request_body() {
        let json = r#"{"movie_id": 4, "author": "kim", "content": "loved it"}"#;
        let body: NewReview = serde_json::from_str(json).unwrap();
        assert_eq!(body.movie_id, 4);
        assert_eq!(body.author, "kim");
    }

    #[test]
    fn rating_summary_none_serializes_as_null() {
        let summary = RatingSummary {
            rating: None,
            count: 0,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["rating"].is_null());
        assert_eq!(json["count"], 0);
    }
}
