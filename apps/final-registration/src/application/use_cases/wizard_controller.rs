//! Wizard Controller Use Case
//!
//! Owns the two-stage state machine. The eligibility gate must have admitted
//! the participant before any method here is called.

use std::sync::Arc;

use crate::application::dto::{
    CommitResultDto, WizardResponseDto, WizardSubmissionDto, WizardViewDto,
};
use crate::application::ports::RegistrationCommitPort;
use crate::application::stages::{MainStage, OverviewInput, OverviewStage, WizardStep};
use crate::domain::eligibility::Admission;
use crate::domain::shared::SessionId;
use crate::domain::wizard::{
    RegistrationSummary, ValidationErrors, WizardAction, WizardError, WizardRoute, WizardSession,
    WizardSessionRepository, WizardStage, WizardStateMachine,
};
use crate::observability::{record_commit, record_wizard_route};

/// Use case routing wizard requests to the stages.
pub struct WizardController<W, C>
where
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    sessions: Arc<W>,
    main: MainStage,
    overview: OverviewStage<C>,
}

impl<W, C> WizardController<W, C>
where
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    /// Create a new WizardController.
    pub const fn new(sessions: Arc<W>, commit: Arc<C>) -> Self {
        Self {
            sessions,
            main: MainStage,
            overview: OverviewStage::new(commit),
        }
    }

    /// Show the current stage.
    pub async fn view(
        &self,
        session_id: &SessionId,
        admission: &Admission,
    ) -> Result<WizardResponseDto, WizardError> {
        let session = self.load(session_id).await?;
        Ok(WizardResponseDto::view(build_view(&session, admission)))
    }

    /// Handle a submitted form.
    pub async fn submit(
        &self,
        session_id: &SessionId,
        admission: &Admission,
        request: WizardSubmissionDto,
    ) -> Result<WizardResponseDto, WizardError> {
        let action = WizardAction::parse(request.action.as_deref())?;
        let session = self.load(session_id).await?;
        let route = WizardStateMachine::route(session.stage, action);

        record_wizard_route(&session.stage.to_string(), route.as_str());
        tracing::info!(
            session_id = %session_id,
            stage = %session.stage,
            action = %action,
            route = %route,
            "Routing wizard request"
        );

        match route {
            WizardRoute::Advance | WizardRoute::SaveMain => {
                let selection = match self.main.validate(&session, admission, &request.selection) {
                    Ok(selection) => selection,
                    Err(errors) => {
                        tracing::debug!(fields = errors.len(), "Main stage validation failed");
                        // Back on the first stage has nowhere to go.
                        let errors = if action == WizardAction::Back {
                            ValidationErrors::new()
                        } else {
                            errors
                        };
                        return Ok(rejected(route, &session, admission, errors));
                    }
                };

                let updated = match self.main.submit(&session, selection).await {
                    Ok(updated) => updated,
                    Err(never) => match never {},
                };
                let updated = updated.with_stage(route.target_stage());
                self.sessions.save(session_id, &updated).await?;

                Ok(WizardResponseDto {
                    route: Some(route),
                    rebuild: route.rebuilds(),
                    errors: ValidationErrors::new(),
                    view: build_view(&updated, admission),
                    commit: None,
                })
            }
            WizardRoute::Rewind => {
                let updated = session.with_stage(WizardStage::Main);
                self.sessions.save(session_id, &updated).await?;

                Ok(WizardResponseDto {
                    route: Some(route),
                    rebuild: true,
                    errors: ValidationErrors::new(),
                    view: build_view(&updated, admission),
                    commit: None,
                })
            }
            WizardRoute::Commit => {
                let input = OverviewInput {
                    payment_method: request.payment_method,
                };
                let commit_request = match self.overview.validate(&session, admission, &input) {
                    Ok(commit_request) => commit_request,
                    Err(errors) => {
                        tracing::debug!(fields = errors.len(), "Overview validation failed");
                        return Ok(rejected(route, &session, admission, errors));
                    }
                };

                let commit = match self.overview.submit(&session, commit_request).await {
                    Ok(receipt) => {
                        record_commit("success");
                        tracing::info!(
                            participant_id = %admission.participant.id,
                            order_id = %receipt.order_id,
                            "Final registration committed"
                        );
                        CommitResultDto::success(receipt)
                    }
                    Err(e) => {
                        record_commit(e.kind());
                        tracing::error!(
                            participant_id = %admission.participant.id,
                            error = %e,
                            "Final registration commit failed"
                        );
                        CommitResultDto::failure(&e)
                    }
                };

                Ok(WizardResponseDto {
                    route: Some(route),
                    rebuild: false,
                    errors: ValidationErrors::new(),
                    view: build_view(&session, admission),
                    commit: Some(commit),
                })
            }
        }
    }

    async fn load(&self, session_id: &SessionId) -> Result<WizardSession, WizardError> {
        Ok(self.sessions.load(session_id).await?.unwrap_or_default())
    }
}

/// Response for failed validation: same stage, session untouched.
fn rejected(
    route: WizardRoute,
    session: &WizardSession,
    admission: &Admission,
    errors: ValidationErrors,
) -> WizardResponseDto {
    WizardResponseDto {
        route: Some(route),
        rebuild: false,
        errors,
        view: build_view(session, admission),
        commit: None,
    }
}

fn build_view(session: &WizardSession, admission: &Admission) -> WizardViewDto {
    let summary = match session.stage {
        WizardStage::Overview => session.selection.as_ref().and_then(|selection| {
            RegistrationSummary::compute(
                selection,
                &admission.participant.fee_amounts,
                &admission.accompanying_fee_amounts,
            )
        }),
        WizardStage::Main => None,
    };

    let accompanying_persons = match &session.selection {
        Some(selection) => selection.accompanying_persons.clone(),
        None if admission.accompanying_persons_enabled => {
            admission.participant.accompanying_persons.clone()
        }
        None => Vec::new(),
    };

    WizardViewDto {
        stage: session.stage,
        fee_amounts: admission.participant.fee_amounts.clone(),
        accompanying_persons_enabled: admission.accompanying_persons_enabled,
        accompanying_fee_amounts: admission.accompanying_fee_amounts.clone(),
        selection: session.selection.clone(),
        accompanying_persons,
        summary,
        banner: admission.banner.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{CommitError, CommitReceipt, CommitRequest};
    use crate::domain::participant::{FeeAmount, Participant};
    use crate::domain::shared::{FeeAmountId, Money, OrderId, ParticipantId};
    use crate::domain::wizard::{SelectionDraft, SessionStoreError};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemorySessions {
        sessions: Mutex<HashMap<SessionId, WizardSession>>,
        saves: Mutex<usize>,
    }

    impl MemorySessions {
        fn with(session_id: &SessionId, session: WizardSession) -> Self {
            let store = Self::default();
            store.sessions.lock().unwrap().insert(session_id.clone(), session);
            store
        }

        fn get(&self, session_id: &SessionId) -> Option<WizardSession> {
            self.sessions.lock().unwrap().get(session_id).cloned()
        }

        fn save_count(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    #[async_trait]
    impl WizardSessionRepository for MemorySessions {
        async fn load(&self, session: &SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
            Ok(self.get(session))
        }

        async fn save(&self, session: &SessionId, state: &WizardSession) -> Result<(), SessionStoreError> {
            *self.saves.lock().unwrap() += 1;
            self.sessions.lock().unwrap().insert(session.clone(), state.clone());
            Ok(())
        }
    }

    struct FailingSessions;

    #[async_trait]
    impl WizardSessionRepository for FailingSessions {
        async fn load(&self, _session: &SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
            Err(SessionStoreError::Unavailable("down".to_string()))
        }

        async fn save(&self, _session: &SessionId, _state: &WizardSession) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::Unavailable("down".to_string()))
        }
    }

    struct StubCommit {
        result: Result<CommitReceipt, CommitError>,
        calls: Mutex<usize>,
    }

    impl StubCommit {
        fn ok() -> Self {
            Self {
                result: Ok(CommitReceipt {
                    order_id: OrderId::from_raw(31).unwrap(),
                    payment_url: Some("https://pay.example.org/31".to_string()),
                }),
                calls: Mutex::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(CommitError::Unavailable {
                    message: "timeout".to_string(),
                }),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl RegistrationCommitPort for StubCommit {
        async fn commit(&self, _request: &CommitRequest) -> Result<CommitReceipt, CommitError> {
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

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

    fn sid() -> SessionId {
        SessionId::parse("wizard-test").unwrap()
    }

    fn submission(action: Option<&str>, fee: Option<u64>) -> WizardSubmissionDto {
        WizardSubmissionDto {
            action: action.map(str::to_string),
            selection: SelectionDraft {
                fee_amount_id: fee.map(FeeAmountId::new),
                ..SelectionDraft::default()
            },
            payment_method: None,
        }
    }

    fn overview_session() -> WizardSession {
        WizardSession {
            stage: WizardStage::Overview,
            selection: Some(crate::domain::wizard::RegistrationSelection {
                fee_amount_id: FeeAmountId::new(1),
                accompanying_persons: Vec::new(),
                accompanying_fee_amount_id: None,
            }),
        }
    }

    #[tokio::test]
    async fn fresh_session_views_main() {
        let controller = WizardController::new(Arc::new(MemorySessions::default()), Arc::new(StubCommit::ok()));
        let response = controller.view(&sid(), &admission()).await.unwrap();
        assert_eq!(response.view.stage, WizardStage::Main);
        assert!(response.view.summary.is_none());
        assert!(response.route.is_none());
    }

    #[tokio::test]
    async fn main_next_advances_to_overview() {
        let sessions = Arc::new(MemorySessions::default());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::new(StubCommit::ok()));

        let response = controller
            .submit(&sid(), &admission(), submission(Some("next"), Some(1)))
            .await
            .unwrap();

        assert_eq!(response.route, Some(WizardRoute::Advance));
        assert!(response.rebuild);
        assert_eq!(response.view.stage, WizardStage::Overview);
        assert_eq!(response.view.summary.unwrap().total, Money::new(dec!(150)));
        assert_eq!(sessions.get(&sid()).unwrap().stage, WizardStage::Overview);
    }

    #[tokio::test]
    async fn invalid_next_never_transitions_or_writes() {
        let sessions = Arc::new(MemorySessions::default());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::new(StubCommit::ok()));

        let response = controller
            .submit(&sid(), &admission(), submission(Some("next"), None))
            .await
            .unwrap();

        assert_eq!(response.view.stage, WizardStage::Main);
        assert!(!response.rebuild);
        assert!(response.errors.get("fee_amount").is_some());
        assert_eq!(sessions.save_count(), 0);
        assert!(sessions.get(&sid()).is_none());
    }

    #[tokio::test]
    async fn main_default_saves_and_stays() {
        let sessions = Arc::new(MemorySessions::default());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::new(StubCommit::ok()));

        let response = controller
            .submit(&sid(), &admission(), submission(None, Some(1)))
            .await
            .unwrap();

        assert_eq!(response.route, Some(WizardRoute::SaveMain));
        assert_eq!(response.view.stage, WizardStage::Main);
        let stored = sessions.get(&sid()).unwrap();
        assert_eq!(stored.stage, WizardStage::Main);
        assert!(stored.selection.is_some());
    }

    #[tokio::test]
    async fn overview_back_is_idempotent_and_keeps_selection() {
        let sessions = Arc::new(MemorySessions::with(&sid(), overview_session()));
        let commit = Arc::new(StubCommit::ok());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::clone(&commit));

        let first = controller
            .submit(&sid(), &admission(), submission(Some("back"), None))
            .await
            .unwrap();
        assert_eq!(first.route, Some(WizardRoute::Rewind));
        assert!(first.rebuild);
        assert_eq!(first.view.stage, WizardStage::Main);
        let after_first = sessions.get(&sid()).unwrap();
        assert_eq!(after_first.selection, overview_session().selection);

        // Repeating the request on Main leaves the stored state as it was.
        let second = controller
            .submit(&sid(), &admission(), submission(Some("back"), None))
            .await
            .unwrap();
        assert_eq!(second.view.stage, WizardStage::Main);
        assert_eq!(sessions.get(&sid()), Some(after_first));
        assert_eq!(commit.calls(), 0);
    }

    #[tokio::test]
    async fn back_next_cycles_keep_the_stored_selection() {
        let sessions = Arc::new(MemorySessions::default());
        let commit = Arc::new(StubCommit::ok());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::clone(&commit));

        controller
            .submit(&sid(), &admission(), submission(Some("next"), Some(1)))
            .await
            .unwrap();
        let stored = sessions.get(&sid()).unwrap().selection;
        assert!(stored.is_some());

        for _ in 0..3 {
            let back = controller
                .submit(&sid(), &admission(), submission(Some("back"), None))
                .await
                .unwrap();
            assert_eq!(back.view.stage, WizardStage::Main);
            assert_eq!(sessions.get(&sid()).unwrap().selection, stored);

            let next = controller
                .submit(&sid(), &admission(), submission(Some("next"), Some(1)))
                .await
                .unwrap();
            assert_eq!(next.view.stage, WizardStage::Overview);
            assert_eq!(sessions.get(&sid()).unwrap().selection, stored);
        }

        controller
            .submit(&sid(), &admission(), submission(Some("back"), None))
            .await
            .unwrap();
        let invalid = controller
            .submit(&sid(), &admission(), submission(Some("next"), Some(99)))
            .await
            .unwrap();

        assert_eq!(invalid.view.stage, WizardStage::Main);
        assert_eq!(invalid.errors.len(), 1);
        let after = sessions.get(&sid()).unwrap();
        assert_eq!(after.stage, WizardStage::Main);
        assert_eq!(after.selection, stored);
        assert_eq!(commit.calls(), 0);
    }

    #[tokio::test]
    async fn main_back_without_selection_reports_nothing() {
        let sessions = Arc::new(MemorySessions::default());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::new(StubCommit::ok()));

        let response = controller
            .submit(&sid(), &admission(), submission(Some("back"), None))
            .await
            .unwrap();

        assert_eq!(response.route, Some(WizardRoute::SaveMain));
        assert_eq!(response.view.stage, WizardStage::Main);
        assert!(response.errors.is_empty());
        assert_eq!(sessions.save_count(), 0);
    }

    #[tokio::test]
    async fn main_confirm_without_selection_still_reports() {
        let controller = WizardController::new(Arc::new(MemorySessions::default()), Arc::new(StubCommit::ok()));

        let response = controller
            .submit(&sid(), &admission(), submission(Some("confirm"), None))
            .await
            .unwrap();

        assert!(response.errors.get("fee_amount").is_some());
    }

    #[tokio::test]
    async fn main_view_prefills_registered_accompanying_persons() {
        let mut admission = admission();
        admission.participant.accompanying_persons = vec!["Ann".to_string()];
        let controller = WizardController::new(Arc::new(MemorySessions::default()), Arc::new(StubCommit::ok()));

        let disabled = controller.view(&sid(), &admission).await.unwrap();
        assert!(disabled.view.accompanying_persons.is_empty());

        admission.accompanying_persons_enabled = true;
        let enabled = controller.view(&sid(), &admission).await.unwrap();
        assert_eq!(enabled.view.accompanying_persons, vec!["Ann".to_string()]);
    }

    #[tokio::test]
    async fn stored_selection_wins_over_registered_persons() {
        let mut admission = admission();
        admission.participant.accompanying_persons = vec!["Ann".to_string()];
        admission.accompanying_persons_enabled = true;
        let sessions = Arc::new(MemorySessions::with(&sid(), overview_session()));
        let controller = WizardController::new(sessions, Arc::new(StubCommit::ok()));

        let response = controller.view(&sid(), &admission).await.unwrap();

        assert!(response.view.accompanying_persons.is_empty());
    }

    #[tokio::test]
    async fn overview_confirm_commits_without_transition() {
        let sessions = Arc::new(MemorySessions::with(&sid(), overview_session()));
        let commit = Arc::new(StubCommit::ok());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::clone(&commit));

        let response = controller
            .submit(&sid(), &admission(), submission(Some("confirm"), None))
            .await
            .unwrap();

        let result = response.commit.unwrap();
        assert!(result.success);
        assert_eq!(result.order_id.map(|id| id.value()), Some(31));
        assert_eq!(response.view.stage, WizardStage::Overview);
        assert_eq!(commit.calls(), 1);
        assert_eq!(sessions.save_count(), 0);
    }

    #[tokio::test]
    async fn commit_failure_keeps_overview() {
        let sessions = Arc::new(MemorySessions::with(&sid(), overview_session()));
        let controller = WizardController::new(Arc::clone(&sessions), Arc::new(StubCommit::failing()));

        let response = controller
            .submit(&sid(), &admission(), submission(Some("next"), None))
            .await
            .unwrap();

        let result = response.commit.unwrap();
        assert!(!result.success);
        assert!(result.error.unwrap().contains("timeout"));
        assert_eq!(response.view.stage, WizardStage::Overview);
        assert_eq!(sessions.get(&sid()), Some(overview_session()));
    }

    #[tokio::test]
    async fn stale_overview_selection_is_not_committed() {
        let mut stale = overview_session();
        if let Some(selection) = stale.selection.as_mut() {
            selection.fee_amount_id = FeeAmountId::new(99);
        }
        let sessions = Arc::new(MemorySessions::with(&sid(), stale));
        let commit = Arc::new(StubCommit::ok());
        let controller = WizardController::new(Arc::clone(&sessions), Arc::clone(&commit));

        let response = controller
            .submit(&sid(), &admission(), submission(Some("confirm"), None))
            .await
            .unwrap();

        assert!(!response.errors.is_empty());
        assert!(response.commit.is_none());
        assert_eq!(commit.calls(), 0);
    }

    #[tokio::test]
    async fn unknown_action_is_rejected_before_loading() {
        let controller = WizardController::new(Arc::new(FailingSessions), Arc::new(StubCommit::ok()));
        let err = controller
            .submit(&sid(), &admission(), submission(Some("teleport"), None))
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::InvalidAction { .. }));
    }

    #[tokio::test]
    async fn store_failure_surfaces() {
        let controller = WizardController::new(Arc::new(FailingSessions), Arc::new(StubCommit::ok()));
        let err = controller.view(&sid(), &admission()).await.unwrap_err();
        assert!(matches!(err, WizardError::SessionStore(_)));
    }
}
