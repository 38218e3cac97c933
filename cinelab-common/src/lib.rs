//! # Cinelab Common Library
//!
//! Shared code for the Cinelab services including:
//! - Domain models (movies, reviews, rating summaries)
//! - Error types
//! - Configuration file loading and value resolution

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
