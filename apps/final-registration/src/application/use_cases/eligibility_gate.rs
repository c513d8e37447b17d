//! Eligibility Gate Use Case
//!
//! Ordered, fail-fast preconditions that run before any wizard stage:
//!
//! 1. logged in
//! 2. participant (confirmed or awaiting confirmation)
//! 3. deadline not passed
//! 4. fee amounts present
//! 5. accompanying person fees present (when the feature is enabled)
//! 6. existing order neither paid nor unknown to the payment service

use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::Url;

use crate::application::ports::{
    AuthPort, AuthState, FeeStatePort, PaymentGatewayPort, RegistrationSettings, SettingsPort,
};
use crate::application::services::{PaymentResolution, PaymentStatusResolver};
use crate::domain::eligibility::{
    Admission, Block, BlockReason, EligibilityOutcome, MessageLink, Severity, UserMessage,
};
use crate::domain::shared::SessionId;
use crate::observability::record_eligibility_outcome;

/// Use case deciding whether a request may enter the wizard.
pub struct EligibilityGate<A, S, F, G>
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
{
    auth: Arc<A>,
    settings: Arc<S>,
    fee_state: Arc<F>,
    resolver: Arc<PaymentStatusResolver<G>>,
}

impl<A, S, F, G> EligibilityGate<A, S, F, G>
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
{
    /// Create a new EligibilityGate.
    pub const fn new(
        auth: Arc<A>,
        settings: Arc<S>,
        fee_state: Arc<F>,
        resolver: Arc<PaymentStatusResolver<G>>,
    ) -> Self {
        Self {
            auth,
            settings,
            fee_state,
            resolver,
        }
    }

    /// Run the preconditions. The first failing one decides the outcome.
    pub async fn check(&self, session: Option<&SessionId>, today: NaiveDate) -> EligibilityOutcome {
        let outcome = self.evaluate(session, today).await;

        record_eligibility_outcome(outcome.label());
        match &outcome {
            EligibilityOutcome::Allowed(admission) => tracing::info!(
                participant_id = %admission.participant.id,
                banner = admission.banner.is_some(),
                "Final registration allowed"
            ),
            EligibilityOutcome::Blocked(block) => tracing::info!(
                reason = %block.reason,
                "Final registration blocked"
            ),
        }

        outcome
    }

    async fn evaluate(&self, session: Option<&SessionId>, today: NaiveDate) -> EligibilityOutcome {
        let settings = self.settings.registration_settings().await;

        let auth = match session {
            Some(session) => self.auth.current_user(session).await,
            None => AuthState::Anonymous,
        };
        let (status, participant) = match auth {
            AuthState::Anonymous => {
                return EligibilityOutcome::Blocked(Block::redirect(
                    BlockReason::NotAuthenticated,
                    login_redirect(&settings),
                ));
            }
            AuthState::Authenticated {
                status,
                participant,
            } => (status, participant),
        };

        let participant = match participant {
            Some(participant) if status.is_participant() => participant,
            _ => return blocked(BlockReason::NotRegistered, not_registered_message(&settings)),
        };

        if !settings.deadline.is_open(today) {
            return blocked(
                BlockReason::RegistrationClosed,
                UserMessage::new(Severity::Warning, "The final registration is closed."),
            );
        }

        if !participant.is_payable() {
            return blocked(BlockReason::FeeMisconfigured, fee_problem_message(&settings));
        }

        let accompanying_fee_amounts = if settings.accompanying_persons_enabled {
            match self.fee_state.accompanying_person_fee_amounts().await {
                Some(amounts) if !amounts.is_empty() => amounts,
                _ => {
                    return blocked(
                        BlockReason::AccompanyingPersonFeeMisconfigured,
                        fee_problem_message(&settings),
                    );
                }
            }
        } else {
            Vec::new()
        };

        let banner = match self.resolver.resolve(participant.order_id()).await {
            PaymentResolution::NoOrder => None,
            PaymentResolution::GatewayUnavailable { .. } => {
                return blocked(
                    BlockReason::GatewayUnavailable,
                    UserMessage::new(
                        Severity::Error,
                        "Currently it is not possible to proceed with the final registration. Please try again later...",
                    ),
                );
            }
            PaymentResolution::Resolved { order, .. } if order.is_payed() => {
                return blocked(BlockReason::AlreadyCompleted, already_completed_message(&settings));
            }
            PaymentResolution::Resolved { order, .. } if order.awaits_bank_transfer() => {
                Some(bank_transfer_banner(&settings))
            }
            PaymentResolution::Resolved { .. } => None,
        };

        EligibilityOutcome::Allowed(Admission {
            participant,
            accompanying_persons_enabled: settings.accompanying_persons_enabled,
            accompanying_fee_amounts,
            banner,
        })
    }
}

/// Login URL carrying the final registration page as return destination.
#[must_use]
pub fn login_redirect(settings: &RegistrationSettings) -> String {
    let destination = &settings.links.final_registration;
    match Url::parse(&settings.links.login) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("destination", destination);
            url.to_string()
        }
        Err(_) => format!("{}?destination={destination}", settings.links.login),
    }
}

const fn blocked(reason: BlockReason, message: UserMessage) -> EligibilityOutcome {
    EligibilityOutcome::Blocked(Block::with_message(reason, message))
}

fn not_registered_message(settings: &RegistrationSettings) -> UserMessage {
    UserMessage::new(
        Severity::Warning,
        format!(
            "You are not registered for the {} conference. Please go to the pre-registration form.",
            settings.conference_name
        ),
    )
    .with_link(MessageLink::new(
        "pre-registration form",
        settings.links.pre_registration.clone(),
    ))
}

fn fee_problem_message(settings: &RegistrationSettings) -> UserMessage {
    UserMessage::new(
        Severity::Error,
        format!(
            "Something is wrong with your fee, please contact {}.",
            settings.support_email
        ),
    )
    .with_link(MessageLink::mailto(&settings.support_email))
}

fn already_completed_message(settings: &RegistrationSettings) -> UserMessage {
    UserMessage::new(
        Severity::Info,
        format!(
            "You already finished the final registration for the {}. If you have questions please contact the secretariat at {}.",
            settings.conference_name, settings.support_email
        ),
    )
    .with_link(MessageLink::mailto(&settings.support_email))
}

fn bank_transfer_banner(settings: &RegistrationSettings) -> UserMessage {
    UserMessage::new(
        Severity::Warning,
        "You chose to finish your final registration by bank transfer. Click here for the bank transfer information. Please continue if you want to choose a different payment method.",
    )
    .with_link(MessageLink::new("Click here", settings.links.bank_transfer.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockPaymentGatewayPort, SiteLinks};
    use crate::domain::eligibility::RegistrationDeadline;
    use crate::domain::participant::{FeeAmount, Participant, RegistrationStatus};
    use crate::domain::payment::Order;
    use crate::domain::shared::{FeeAmountId, Money, ParticipantId};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct FixedAuth(AuthState);

    #[async_trait]
    impl AuthPort for FixedAuth {
        async fn current_user(&self, _session: &SessionId) -> AuthState {
            self.0.clone()
        }
    }

    struct FixedSettings(RegistrationSettings);

    #[async_trait]
    impl SettingsPort for FixedSettings {
        async fn registration_settings(&self) -> RegistrationSettings {
            self.0.clone()
        }
    }

    struct FixedFees(Option<Vec<FeeAmount>>);

    #[async_trait]
    impl FeeStatePort for FixedFees {
        async fn accompanying_person_fee_amounts(&self) -> Option<Vec<FeeAmount>> {
            self.0.clone()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    fn settings() -> RegistrationSettings {
        RegistrationSettings {
            conference_name: "ESSHC 2026".to_string(),
            support_email: "esshc@example.org".to_string(),
            deadline: RegistrationDeadline::new(NaiveDate::from_ymd_opt(2026, 6, 30)),
            accompanying_persons_enabled: false,
            final_registration_enabled: true,
            links: SiteLinks {
                login: "https://conference.example.org/login".to_string(),
                pre_registration: "https://conference.example.org/pre-registration".to_string(),
                final_registration: "https://conference.example.org/final-registration".to_string(),
                bank_transfer: "https://conference.example.org/bank-transfer".to_string(),
            },
        }
    }

    fn participant(payment_id: u64, with_fees: bool) -> Participant {
        let fee_amounts = if with_fees {
            vec![FeeAmount::new(FeeAmountId::new(1), "Regular", Money::new(dec!(150)))]
        } else {
            Vec::new()
        };
        Participant {
            id: ParticipantId::new(5),
            name: "Ada".to_string(),
            fee_amounts,
            payment_id,
            accompanying_persons: Vec::new(),
        }
    }

    fn logged_in(participant: Participant) -> AuthState {
        AuthState::Authenticated {
            status: RegistrationStatus::Confirmed,
            participant: Some(participant),
        }
    }

    fn gate(
        auth: AuthState,
        settings: RegistrationSettings,
        fees: Option<Vec<FeeAmount>>,
        gateway: MockPaymentGatewayPort,
    ) -> EligibilityGate<FixedAuth, FixedSettings, FixedFees, MockPaymentGatewayPort> {
        EligibilityGate::new(
            Arc::new(FixedAuth(auth)),
            Arc::new(FixedSettings(settings)),
            Arc::new(FixedFees(fees)),
            Arc::new(PaymentStatusResolver::new(Arc::new(gateway))),
        )
    }

    fn no_gateway_calls() -> MockPaymentGatewayPort {
        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_get_order().times(0);
        gateway
    }

    fn gateway_returning(payed: i64, method: i64) -> MockPaymentGatewayPort {
        let mut gateway = MockPaymentGatewayPort::new();
        gateway
            .expect_get_order()
            .times(1)
            .returning(move |id| Some(Order::from_codes(id, payed, method)));
        gateway
    }

    fn session() -> SessionId {
        SessionId::parse("s-1").unwrap()
    }

    #[tokio::test]
    async fn anonymous_is_redirected_to_login() {
        let gate = gate(AuthState::Anonymous, settings(), None, no_gateway_calls());
        let outcome = gate.check(Some(&session()), today()).await;

        let EligibilityOutcome::Blocked(block) = outcome else {
            panic!("expected block");
        };
        assert_eq!(block.reason, BlockReason::NotAuthenticated);
        let redirect = block.redirect.unwrap();
        assert!(redirect.starts_with("https://conference.example.org/login?destination="));
        assert!(block.message.is_none());
    }

    #[tokio::test]
    async fn missing_session_is_anonymous() {
        let gate = gate(logged_in(participant(0, true)), settings(), None, no_gateway_calls());
        let outcome = gate.check(None, today()).await;
        assert_eq!(outcome.block_reason(), Some(BlockReason::NotAuthenticated));
    }

    #[tokio::test]
    async fn non_participant_points_to_pre_registration() {
        let auth = AuthState::Authenticated {
            status: RegistrationStatus::NotRegistered,
            participant: None,
        };
        let gate = gate(auth, settings(), None, no_gateway_calls());
        let EligibilityOutcome::Blocked(block) = gate.check(Some(&session()), today()).await else {
            panic!("expected block");
        };
        assert_eq!(block.reason, BlockReason::NotRegistered);
        let message = block.message.unwrap();
        assert_eq!(message.links[0].url, "https://conference.example.org/pre-registration");
    }

    #[tokio::test]
    async fn participant_without_confirmation_is_allowed() {
        let auth = AuthState::Authenticated {
            status: RegistrationStatus::WithoutConfirmation,
            participant: Some(participant(0, true)),
        };
        let gate = gate(auth, settings(), None, no_gateway_calls());
        assert!(gate.check(Some(&session()), today()).await.is_allowed());
    }

    #[tokio::test]
    async fn deadline_passed_blocks() {
        let gate = gate(logged_in(participant(0, true)), settings(), None, no_gateway_calls());
        let after = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        assert_eq!(
            gate.check(Some(&session()), after).await.block_reason(),
            Some(BlockReason::RegistrationClosed)
        );
    }

    #[tokio::test]
    async fn last_day_is_still_open() {
        let gate = gate(logged_in(participant(0, true)), settings(), None, no_gateway_calls());
        let last = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        assert!(gate.check(Some(&session()), last).await.is_allowed());
    }

    #[tokio::test]
    async fn empty_fees_block_with_support_email() {
        let gate = gate(logged_in(participant(0, false)), settings(), None, no_gateway_calls());
        let EligibilityOutcome::Blocked(block) = gate.check(Some(&session()), today()).await else {
            panic!("expected block");
        };
        assert_eq!(block.reason, BlockReason::FeeMisconfigured);
        let message = block.message.unwrap();
        assert!(message.text.contains("esshc@example.org"));
        assert_eq!(message.links[0].url, "mailto:esshc@example.org");
    }

    #[tokio::test]
    async fn accompanying_fee_state_missing_blocks() {
        let mut s = settings();
        s.accompanying_persons_enabled = true;
        let missing = gate(logged_in(participant(0, true)), s.clone(), None, no_gateway_calls());
        assert_eq!(
            missing.check(Some(&session()), today()).await.block_reason(),
            Some(BlockReason::AccompanyingPersonFeeMisconfigured)
        );

        let empty = gate(logged_in(participant(0, true)), s, Some(Vec::new()), no_gateway_calls());
        assert_eq!(
            empty.check(Some(&session()), today()).await.block_reason(),
            Some(BlockReason::AccompanyingPersonFeeMisconfigured)
        );
    }

    #[tokio::test]
    async fn accompanying_fees_are_admitted() {
        let mut s = settings();
        s.accompanying_persons_enabled = true;
        let fees = vec![FeeAmount::new(FeeAmountId::new(10), "Guest", Money::new(dec!(40)))];
        let gate = gate(logged_in(participant(0, true)), s, Some(fees.clone()), no_gateway_calls());
        let EligibilityOutcome::Allowed(admission) = gate.check(Some(&session()), today()).await else {
            panic!("expected admission");
        };
        assert_eq!(admission.accompanying_fee_amounts, fees);
        assert!(admission.accompanying_persons_enabled);
    }

    #[tokio::test]
    async fn gateway_unavailable_blocks() {
        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_get_order().times(1).returning(|_| None);
        let gate = gate(logged_in(participant(77, true)), settings(), None, gateway);
        assert_eq!(
            gate.check(Some(&session()), today()).await.block_reason(),
            Some(BlockReason::GatewayUnavailable)
        );
    }

    #[tokio::test]
    async fn paid_order_blocks_regardless_of_method() {
        for method in [1, 2, 3, 99] {
            let gate = gate(
                logged_in(participant(77, true)),
                settings(),
                None,
                gateway_returning(1, method),
            );
            assert_eq!(
                gate.check(Some(&session()), today()).await.block_reason(),
                Some(BlockReason::AlreadyCompleted),
                "method {method}"
            );
        }
    }

    #[tokio::test]
    async fn unpaid_bank_transfer_enters_with_banner() {
        let gate = gate(logged_in(participant(77, true)), settings(), None, gateway_returning(0, 2));
        let EligibilityOutcome::Allowed(admission) = gate.check(Some(&session()), today()).await else {
            panic!("expected admission");
        };
        let banner = admission.banner.unwrap();
        assert_eq!(banner.severity, Severity::Warning);
        assert_eq!(banner.links[0].url, "https://conference.example.org/bank-transfer");
    }

    #[tokio::test]
    async fn unpaid_online_enters_without_banner() {
        let gate = gate(logged_in(participant(77, true)), settings(), None, gateway_returning(0, 1));
        let EligibilityOutcome::Allowed(admission) = gate.check(Some(&session()), today()).await else {
            panic!("expected admission");
        };
        assert!(admission.banner.is_none());
    }

    #[tokio::test]
    async fn earlier_gates_win_over_later_ones() {
        // Closed deadline and empty fees: the deadline is reported.
        let gate = gate(logged_in(participant(77, false)), settings(), None, no_gateway_calls());
        let after = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        assert_eq!(
            gate.check(Some(&session()), after).await.block_reason(),
            Some(BlockReason::RegistrationClosed)
        );
    }

    #[test]
    fn login_redirect_encodes_destination() {
        let url = login_redirect(&settings());
        assert_eq!(
            url,
            "https://conference.example.org/login?destination=https%3A%2F%2Fconference.example.org%2Ffinal-registration"
        );
    }
}
