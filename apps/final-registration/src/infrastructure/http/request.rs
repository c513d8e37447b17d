//! HTTP request DTOs.

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::application::dto::WizardSubmissionDto;
use crate::domain::shared::{FeeAmountId, SessionId};
use crate::domain::wizard::SelectionDraft;

/// Header carrying the browser session.
pub const SESSION_HEADER: &str = "x-session-id";

/// Extract the session from request headers. Missing, blank or non-UTF-8 values yield `None`.
#[must_use]
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(SessionId::parse)
}

/// Body of `POST /final-registration`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardFormRequest {
    /// Wizard action (`next`, `back`, `confirm`).
    #[serde(default)]
    pub action: Option<String>,
    /// Chosen fee tier.
    #[serde(default)]
    pub fee_amount_id: Option<u64>,
    /// Accompanying person names.
    #[serde(default)]
    pub accompanying_persons: Vec<String>,
    /// Chosen fee tier for accompanying persons.
    #[serde(default)]
    pub accompanying_fee_amount_id: Option<u64>,
    /// Payment method on the overview stage.
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl From<WizardFormRequest> for WizardSubmissionDto {
    fn from(request: WizardFormRequest) -> Self {
        Self {
            action: request.action,
            selection: SelectionDraft {
                fee_amount_id: request.fee_amount_id.map(FeeAmountId::new),
                accompanying_persons: request.accompanying_persons,
                accompanying_fee_amount_id: request.accompanying_fee_amount_id.map(FeeAmountId::new),
            },
            payment_method: request.payment_method,
        }
    }
}
