//! REST error types

use curdis_core::DomainError;
use reqwest::StatusCode;

/// REST client error type
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport failure, including the overall request timeout
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The API answered with a status of 300 or above
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request was rejected locally before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),
}

impl RestError {
    /// Status code returned by the API, if the request got that far
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Check if the API rejected the bot token
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Check if the request timed out
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// REST result type
pub type RestResult<T> = Result<T, RestError>;
