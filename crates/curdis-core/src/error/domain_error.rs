//! Domain errors - error types for the platform model

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // =========================================================================
    // Decoding Errors
    // =========================================================================
    #[error("Invalid snowflake: {0}")]
    InvalidSnowflake(String),

    #[error("Invalid value for option '{name}': expected {expected}")]
    InvalidOptionValue { name: String, expected: &'static str },

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    #[error("Missing option: {0}")]
    MissingOption(String),

    #[error("Option '{name}' has type {actual}, expected {expected}")]
    OptionTypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Get an error code string for logs and responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSnowflake(_) => "INVALID_SNOWFLAKE",
            Self::InvalidOptionValue { .. } => "INVALID_OPTION_VALUE",
            Self::MissingOption(_) => "MISSING_OPTION",
            Self::OptionTypeMismatch { .. } => "OPTION_TYPE_MISMATCH",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Check if this error came from decoding platform data
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Self::InvalidSnowflake(_) | Self::InvalidOptionValue { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}
