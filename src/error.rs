//! Error types for the forecast service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, ValidationErrorResponse};
use crate::validation::FieldErrors;

/// Message shown to users whenever the provider could not be used.
pub const FETCH_FAILED_MESSAGE: &str =
    "Unable to retrieve weather information for the provided zip code.";

// == Fetch Error ==
/// Failure to obtain a forecast from the weather provider.
///
/// Every variant is a provider error: per request, never retried, and
/// reported to users with [`FETCH_FAILED_MESSAGE`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// Provider answered with a non-success status
    #[error("weather provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, TLS or timeout failure
    #[error("weather provider request failed: {0}")]
    Transport(String),

    /// Response body was not the expected JSON
    #[error("malformed weather provider response: {0}")]
    Malformed(String),

    /// No API key configured
    #[error("weather API key is not configured")]
    MissingApiKey,
}

impl FetchError {
    /// User-facing message, independent of the failure detail.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    /// HTTP status reported by the provider, if it answered at all.
    pub fn provider_status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let err = err.without_url();
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

// == Cache Error ==
/// Failure of the cache backend.
///
/// The fetcher fails open on these: a read error is a miss and a write error
/// only skips caching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Backend could not be reached
    #[error("cache unavailable: {0}")]
    Unavailable(String),

    /// Backend refused the key or value
    #[error("cache rejected entry: {0}")]
    Rejected(String),
}

// == API Error ==
/// Outcome of a failed HTTP request, mapped onto a status code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse::from_errors(&errors)),
            )
                .into_response(),
            ApiError::Fetch(err) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(err.user_message())),
            )
                .into_response(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
