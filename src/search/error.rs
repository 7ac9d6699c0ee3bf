//! Failure taxonomy for a search call

use thiserror::Error;

/// Reasons a search produced no results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("access denied - the SearXNG instance may forbid API access or this IP may be blocked")]
    AccessDenied,

    #[error("HTTP {0}")]
    Http(u16),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

impl SearchError {
    /// Map a non-200 status to its error
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => SearchError::AccessDenied,
            other => SearchError::Http(other),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}
