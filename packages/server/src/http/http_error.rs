//! HTTP error handling
//!
//! Every failure leaves the server as the same JSON envelope:
//!
//! ```json
//! {"success": false, "error": 404, "message": "resource not found"}
//! ```

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use trivia_core::models::ValidationError;
use trivia_core::services::TriviaServiceError;

/// The five error classes the API reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    Unprocessable,
    ServerError,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Canonical client-facing message
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::NotFound => "resource not found",
            ErrorKind::MethodNotAllowed => "method not allowed",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::ServerError => "internal server error",
        }
    }
}

/// Wire format of an error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// Error returned by handlers
///
/// `details` is logged, never sent to the client.
#[derive(Debug)]
pub struct HttpError {
    pub kind: ErrorKind,
    pub details: Option<String>,
}

impl HttpError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            details: None,
        }
    }

    pub fn with_details(kind: ErrorKind, details: impl Into<String>) -> Self {
        Self {
            kind,
            details: Some(details.into()),
        }
    }

    /// Malformed or mistyped JSON body, reported as `kind`
    pub fn from_json_rejection(kind: ErrorKind, rejection: JsonRejection) -> Self {
        Self::with_details(kind, rejection.body_text())
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            success: false,
            error: self.kind.status().as_u16(),
            message: self.kind.message().to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match (&self.kind, &self.details) {
            (ErrorKind::ServerError, Some(details)) => tracing::error!("❌ {}", details),
            (_, Some(details)) => tracing::debug!("{:?}: {}", self.kind, details),
            _ => {}
        }

        (self.kind.status(), Json(self.envelope())).into_response()
    }
}

impl From<TriviaServiceError> for HttpError {
    fn from(err: TriviaServiceError) -> Self {
        let kind = match &err {
            TriviaServiceError::BadRequest(_) => ErrorKind::BadRequest,
            TriviaServiceError::NotFound(_) => ErrorKind::NotFound,
            TriviaServiceError::Unprocessable(_) | TriviaServiceError::ValidationFailed(_) => {
                ErrorKind::Unprocessable
            }
            TriviaServiceError::Store(_) => ErrorKind::ServerError,
        };

        HttpError::with_details(kind, err.to_string())
    }
}

impl From<ValidationError> for HttpError {
    fn from(err: ValidationError) -> Self {
        HttpError::with_details(ErrorKind::Unprocessable, err.to_string())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::with_details(ErrorKind::BadRequest, rejection.body_text())
    }
}
