//! HTTP response DTOs.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::dto::PaymentStatusLineDto;
use crate::domain::eligibility::{BlockReason, UserMessage};
use crate::error::ApiError;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Body shown instead of the wizard when the eligibility gate blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedResponse {
    /// Always `true`.
    pub blocked: bool,
    /// Why the wizard is not shown.
    pub reason: BlockReason,
    /// Message for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<UserMessage>,
}

/// Personal page payment line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusResponse {
    /// The line, absent for users who are not participants.
    pub line: Option<PaymentStatusLineDto>,
    /// Main line as displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl From<Option<PaymentStatusLineDto>> for PaymentStatusResponse {
    fn from(line: Option<PaymentStatusLineDto>) -> Self {
        Self {
            text: line.as_ref().map(PaymentStatusLineDto::line),
            line,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code().http_status(), Json(self.to_http_response())).into_response()
    }
}
