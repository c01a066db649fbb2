//! Application error types
//!
//! Top-level error for binaries hosting a bot.

use crate::config::ConfigError;
use crate::telemetry::TracingError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Startup errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TracingError),

    // Platform errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("REST API error: {0}")]
    Rest(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get an error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Telemetry(_) => "TELEMETRY_ERROR",
            Self::Authentication(_) => "AUTHENTICATION_FAILED",
            Self::Rest(_) => "REST_ERROR",
            Self::Gateway(_) => "GATEWAY_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code for this error
    ///
    /// Configuration problems exit with 78 (`EX_CONFIG`), everything else with 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            _ => 1,
        }
    }

    /// Create a REST error from any displayable error
    pub fn rest(err: impl std::fmt::Display) -> Self {
        Self::Rest(err.to_string())
    }

    /// Create a gateway error from any displayable error
    pub fn gateway(err: impl std::fmt::Display) -> Self {
        Self::Gateway(err.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
