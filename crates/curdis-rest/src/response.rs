//! Raw REST response

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Status and body of a completed REST call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RestResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any status below 300 counts as success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_u16() < 300
    }

    /// Turn a non-success status into [`RestError::Status`]
    pub fn error_for_status(self) -> Result<Self, RestError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(RestError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
