//! Wizard DTOs.

use serde::{Deserialize, Serialize};

use crate::application::ports::{CommitError, CommitReceipt};
use crate::domain::eligibility::UserMessage;
use crate::domain::participant::FeeAmount;
use crate::domain::shared::OrderId;
use crate::domain::wizard::{
    RegistrationSelection, RegistrationSummary, SelectionDraft, ValidationErrors, WizardRoute,
    WizardStage,
};

/// A submitted wizard form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardSubmissionDto {
    /// `"next"`, `"back"`, `"confirm"`; the stage default when absent.
    #[serde(default)]
    pub action: Option<String>,
    /// Main stage fields.
    #[serde(flatten)]
    pub selection: SelectionDraft,
    /// Overview stage payment method choice.
    #[serde(default)]
    pub payment_method: Option<String>,
}

/// What the participant sees on the current stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardViewDto {
    /// Current stage.
    pub stage: WizardStage,
    /// Selectable fee tiers.
    pub fee_amounts: Vec<FeeAmount>,
    /// Whether accompanying persons may be registered.
    pub accompanying_persons_enabled: bool,
    /// Selectable fee tiers for accompanying persons.
    pub accompanying_fee_amounts: Vec<FeeAmount>,
    /// Selection stored so far.
    pub selection: Option<RegistrationSelection>,
    /// Accompanying person names the form starts with.
    pub accompanying_persons: Vec<String>,
    /// Fees and total (overview stage only).
    pub summary: Option<RegistrationSummary>,
    /// Advisory banner from the eligibility gate.
    pub banner: Option<UserMessage>,
}

/// Outcome of a registration commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResultDto {
    /// Whether the order was created.
    pub success: bool,
    /// Created order.
    pub order_id: Option<OrderId>,
    /// Where to pay online.
    pub payment_url: Option<String>,
    /// Failure message.
    pub error: Option<String>,
}

impl CommitResultDto {
    /// Successful commit.
    #[must_use]
    pub fn success(receipt: CommitReceipt) -> Self {
        Self {
            success: true,
            order_id: Some(receipt.order_id),
            payment_url: receipt.payment_url,
            error: None,
        }
    }

    /// Failed commit.
    #[must_use]
    pub fn failure(error: &CommitError) -> Self {
        Self {
            success: false,
            order_id: None,
            payment_url: None,
            error: Some(error.to_string()),
        }
    }
}

/// Response to a wizard request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardResponseDto {
    /// Route taken (absent for plain views).
    pub route: Option<WizardRoute>,
    /// Whether the page must be rebuilt for a new stage.
    pub rebuild: bool,
    /// Field errors.
    pub errors: ValidationErrors,
    /// The page to show.
    pub view: WizardViewDto,
    /// Commit outcome (overview submissions only).
    pub commit: Option<CommitResultDto>,
}

impl WizardResponseDto {
    /// A plain view without routing.
    #[must_use]
    pub fn view(view: WizardViewDto) -> Self {
        Self {
            route: None,
            rebuild: false,
            errors: ValidationErrors::new(),
            view,
            commit: None,
        }
    }
}
