//! Overview stage: review and confirmation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::WizardStep;
use crate::application::ports::{CommitError, CommitReceipt, CommitRequest, RegistrationCommitPort};
use crate::domain::eligibility::Admission;
use crate::domain::payment::PaymentMethod;
use crate::domain::wizard::{
    RegistrationSummary, SelectionContext, SelectionDraft, SelectionRules, ValidationErrors,
    WizardSession,
};

/// Field name of the payment method choice.
pub const FIELD_PAYMENT_METHOD: &str = "payment_method";
/// Field name used when the stored selection is missing or stale.
pub const FIELD_SELECTION: &str = "selection";

/// Raw input of the overview stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewInput {
    /// `"online"`, `"bank_transfer"` or `"cash"`; online payment when absent.
    #[serde(default)]
    pub payment_method: Option<String>,
}

/// Handler of the overview stage.
pub struct OverviewStage<C>
where
    C: RegistrationCommitPort,
{
    commit: Arc<C>,
}

impl<C> OverviewStage<C>
where
    C: RegistrationCommitPort,
{
    /// Create a new overview stage.
    pub const fn new(commit: Arc<C>) -> Self {
        Self { commit }
    }

    fn parse_payment_method(raw: Option<&str>) -> Option<PaymentMethod> {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            None => Some(PaymentMethod::OnlinePayment),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "online" => Some(PaymentMethod::OnlinePayment),
                "bank_transfer" => Some(PaymentMethod::BankTransfer),
                "cash" => Some(PaymentMethod::CashOnSite),
                _ => None,
            },
        }
    }
}

#[async_trait]
impl<C> WizardStep for OverviewStage<C>
where
    C: RegistrationCommitPort,
{
    type Input = OverviewInput;
    type Validated = CommitRequest;
    type Output = CommitReceipt;
    type Error = CommitError;

    /// Re-check the carried-over selection against current data.
    fn validate(
        &self,
        session: &WizardSession,
        admission: &Admission,
        input: &OverviewInput,
    ) -> Result<CommitRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let payment_method = Self::parse_payment_method(input.payment_method.as_deref());
        if payment_method.is_none() {
            errors.add(FIELD_PAYMENT_METHOD, "Please choose a valid payment method.");
        }

        let Some(selection) = session.selection.as_ref() else {
            errors.add(FIELD_SELECTION, "Your selection has expired. Please go back and choose your fee again.");
            return Err(errors);
        };

        let ctx = SelectionContext {
            participant: &admission.participant,
            accompanying_persons_enabled: admission.accompanying_persons_enabled,
            accompanying_fee_amounts: &admission.accompanying_fee_amounts,
        };
        let summary = match SelectionRules::validate(&SelectionDraft::from(selection), &ctx) {
            Ok(selection) => {
                let summary = RegistrationSummary::compute(
                    &selection,
                    &admission.participant.fee_amounts,
                    &admission.accompanying_fee_amounts,
                );
                if summary.is_none() {
                    errors.add(FIELD_SELECTION, "Your selection is no longer available. Please go back and choose your fee again.");
                }
                summary
            }
            Err(selection_errors) => {
                errors.merge(selection_errors);
                None
            }
        };

        match (summary, payment_method) {
            (Some(summary), Some(payment_method)) if errors.is_empty() => {
                Ok(CommitRequest::new(&admission.participant, summary, payment_method))
            }
            _ => Err(errors),
        }
    }

    async fn submit(
        &self,
        _session: &WizardSession,
        validated: CommitRequest,
    ) -> Result<CommitReceipt, CommitError> {
        self.commit.commit(&validated).await
    }
}
