//! Service Layer Error Types
//!
//! Each variant corresponds to one failure class of the HTTP surface; the
//! route layer maps them onto status codes.

use crate::models::ValidationError;
use thiserror::Error;

/// Service operation errors
#[derive(Error, Debug)]
pub enum TriviaServiceError {
    /// Request is missing required fields or names an unknown category
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Query produced no results where some were expected
    #[error("Not found: {0}")]
    NotFound(String),

    /// Well-formed request the store refused to persist
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Payload failed validation before reaching the store
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Unexpected store failure
    #[error("Store operation failed: {0:#}")]
    Store(anyhow::Error),
}

impl TriviaServiceError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }
}
