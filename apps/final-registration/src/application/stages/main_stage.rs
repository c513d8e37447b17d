//! Main stage: fee and accompanying person selection.

use std::convert::Infallible;

use async_trait::async_trait;

use super::WizardStep;
use crate::domain::eligibility::Admission;
use crate::domain::wizard::{
    RegistrationSelection, SelectionContext, SelectionDraft, SelectionRules, ValidationErrors,
    WizardSession,
};

/// Handler of the main stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainStage;

#[async_trait]
impl WizardStep for MainStage {
    type Input = SelectionDraft;
    type Validated = RegistrationSelection;
    type Output = WizardSession;
    type Error = Infallible;

    fn validate(
        &self,
        _session: &WizardSession,
        admission: &Admission,
        input: &SelectionDraft,
    ) -> Result<RegistrationSelection, ValidationErrors> {
        let ctx = SelectionContext {
            participant: &admission.participant,
            accompanying_persons_enabled: admission.accompanying_persons_enabled,
            accompanying_fee_amounts: &admission.accompanying_fee_amounts,
        };
        SelectionRules::validate(input, &ctx)
    }

    /// Store the selection in a new session value. No other side effects.
    async fn submit(
        &self,
        session: &WizardSession,
        validated: RegistrationSelection,
    ) -> Result<WizardSession, Infallible> {
        Ok(session.with_selection(validated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::participant::{FeeAmount, Participant};
    use crate::domain::shared::{FeeAmountId, Money, ParticipantId};
    use crate::domain::wizard::WizardStage;
    use rust_decimal_macros::dec;

    fn admission() -> Admission {
        Admission {
            participant: Participant {
                id: ParticipantId::new(1),
                name: "Ada".to_string(),
                fee_amounts: vec![FeeAmount::new(FeeAmountId::new(1), "Regular", Money::new(dec!(150)))],
                payment_id: 0,
                accompanying_persons: Vec::new(),
            },
            accompanying_persons_enabled: false,
            accompanying_fee_amounts: Vec::new(),
            banner: None,
        }
    }

    #[tokio::test]
    async fn submit_stores_selection_without_changing_stage() {
        let stage = MainStage;
        let session = WizardSession::default();
        let draft = SelectionDraft {
            fee_amount_id: Some(FeeAmountId::new(1)),
            ..SelectionDraft::default()
        };

        let selection = stage.validate(&session, &admission(), &draft).unwrap();
        let updated = stage.submit(&session, selection.clone()).await.unwrap();

        assert_eq!(updated.stage, WizardStage::Main);
        assert_eq!(updated.selection, Some(selection));
    }

    #[test]
    fn validate_reports_missing_fee() {
        let errors = MainStage
            .validate(&WizardSession::default(), &admission(), &SelectionDraft::default())
            .unwrap_err();
        assert!(errors.get("fee_amount").is_some());
    }
}
