//! Error handling for the HTTP surface.
//!
//! Structured errors with stable reason codes. Blocked eligibility outcomes are
//! not errors and never pass through here.
//!
//! # HTTP Status Codes
//!
//! | Status | Usage |
//! |--------|-------|
//! | `400 Bad Request` | Malformed request, unknown wizard action |
//! | `500 Internal Server Error` | Wizard session store failure |

use std::collections::HashMap;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::wizard::WizardError;

/// Error codes for the final registration service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid request format or missing fields.
    InvalidRequest,
    /// Unrecognized wizard action identifier.
    InvalidAction,
    /// Wizard session could not be loaded or saved.
    SessionStoreFailure,
    /// Internal server error.
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidAction => StatusCode::BAD_REQUEST,
            Self::SessionStoreFailure | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidAction => "INVALID_ACTION",
            Self::SessionStoreFailure => "SESSION_STORE_FAILURE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A rich error with context.
#[derive(Debug, Error)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl ApiError {
    /// Create a new error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Convert to an HTTP error body.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            details: self.context.iter().cloned().collect(),
        }
    }

    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

impl From<WizardError> for ApiError {
    fn from(error: WizardError) -> Self {
        match error {
            WizardError::InvalidAction { action } => {
                Self::new(ErrorCode::InvalidAction, format!("Unrecognized action '{action}'"))
                    .with_context("action", action)
            }
            WizardError::SessionStore(e) => {
                Self::new(ErrorCode::SessionStoreFailure, e.to_string())
            }
        }
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional details.
    pub details: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::SessionStoreError;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidAction.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::SessionStoreFailure.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_action_conversion() {
        let error = ApiError::from(WizardError::InvalidAction {
            action: "jump".to_string(),
        });
        let response = error.to_http_response();
        assert_eq!(response.code, "INVALID_ACTION");
        assert_eq!(response.details.get("action").map(String::as_str), Some("jump"));
    }

    #[test]
    fn test_store_failure_conversion() {
        let error = ApiError::from(WizardError::SessionStore(SessionStoreError::Unavailable(
            "poisoned".to_string(),
        )));
        assert_eq!(error.code(), ErrorCode::SessionStoreFailure);
        assert!(error.message().contains("poisoned"));
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::invalid_request("Missing field");
        assert_eq!(error.to_string(), "[INVALID_REQUEST] Missing field");
        assert!(error.context().is_empty());
    }
}
