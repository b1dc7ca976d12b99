//! Error types for creator searches

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message reported for failures the caller cannot act on
pub const UNEXPECTED_MESSAGE: &str = "Failed to search YouTube. Check your API key.";

/// Errors that abort a creator search
#[derive(Debug, Error)]
pub enum SearchError {
    /// Bad request input, detected before any network call
    #[error("{0}")]
    InvalidInput(String),

    /// No YouTube API key configured
    #[error("API key not configured")]
    MissingApiKey,

    /// The YouTube API rejected the request
    #[error("{0}")]
    Upstream(String),

    /// Network or decoding failure
    #[error("Failed to search YouTube. Check your API key.")]
    Unexpected(#[source] anyhow::Error),
}

impl SearchError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidInput(_) | SearchError::Upstream(_) => StatusCode::BAD_REQUEST,
            SearchError::MissingApiKey | SearchError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<anyhow::Error> for SearchError {
    fn from(err: anyhow::Error) -> Self {
        SearchError::Unexpected(err)
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        if let SearchError::Unexpected(ref err) = self {
            tracing::error!("Search error: {:#}", err);
        }

        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Convenience result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;
