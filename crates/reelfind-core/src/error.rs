//! Error types for reelfind-core.
//!
//! [`ApiError`] describes what went wrong talking to the catalog.
//! [`SearchError`] is the user-facing taxonomy a submit resolves to; every
//! variant is handled locally by showing a notification.

use crate::config::GENERIC_ERROR_MESSAGE;
use thiserror::Error;

/// Errors from a single catalog request.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, connection, timeout, CORS)
    #[error("Request failed: {0}")]
    Transport(String),
    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// `message` field of the error body, when the body carried one
        message: Option<String>,
    },
    /// Body of a 2xx response could not be read
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the user: the remote message if present, else the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// How a submit failed, as surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Query was empty or whitespace; no request was made
    #[error("Please enter a movie name to search.")]
    EmptyQuery,
    /// Request succeeded but produced zero movies
    #[error("No movies were found for \"{query}\".")]
    NoResults { query: String },
    /// Network failure, non-2xx status or unreadable body
    #[error("{message}")]
    Transport { message: String },
}

impl From<&ApiError> for SearchError {
    fn from(err: &ApiError) -> Self {
        SearchError::Transport {
            message: err.user_message(),
        }
    }
}
