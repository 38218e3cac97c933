//! Sentiment classifier client
//!
//! Wraps the externally hosted text-classification service behind a single
//! `classify` call so the failure-absorption policy (review creation never
//! fails because the classifier did) is enforced at one call site.
//!
//! The service contract is `POST <endpoint>` with `{"text": ...}` returning
//! `{"label": ..., "score": ...}`. Any connect error, timeout, non-2xx
//! status, or malformed body is a [`SentimentError`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

use cinelab_common::{Error, Result};
use thiserror::Error;

/// Sentiment classifier client errors
#[derive(Debug, Error)]
pub enum SentimentError {
    /// Network communication error (connect failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Classifier returned a non-2xx response
    #[error("Classifier error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse the classifier response JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Request body sent to the classifier
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

/// Classifier result: raw label plus confidence in [0,1]
#[derive(Debug, Clone, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// HTTP client for the sentiment classifier service
#[derive(Clone)]
pub struct SentimentClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SentimentClient {
    /// Create a client with the given endpoint and request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Classify a piece of review text
    pub async fn classify(&self, text: &str) -> std::result::Result<Classification, SentimentError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ClassifyRequest { text })
            .send()
            .await
            .map_err(|e| SentimentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::Api(status.as_u16(), body));
        }

        response
            .json::<Classification>()
            .await
            .map_err(|e| SentimentError::Parse(e.to_string()))
    }
}

/// Derive a 0-10 star rating from a classifier label
///
/// The classifier's label vocabulary is five ordinal star levels such as
/// "4 stars": when the first whitespace-delimited token is a digit string,
/// it is read as a star count `s` and the rating is `s * 2`. Anything else
/// (non-numeric first token, empty label) yields `None`. "0 stars" is a
/// valid zero rating, distinct from `None`.
///
/// This mapping is specific to that vocabulary; swapping in a classifier
/// with different labels requires revisiting it.
pub fn star_rating(label: &str) -> Option<i64> {
    let token = label.split_whitespace().next()?;
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse::<i64>().ok().map(|stars| stars * 2)
    } else {
        None
    }
}
