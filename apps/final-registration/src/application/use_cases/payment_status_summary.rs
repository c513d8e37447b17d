//! Payment Status Summary Use Case
//!
//! The payment line of the personal page. Unlike the eligibility gate, an
//! unreachable payment service only softens the line; nothing is blocked.

use std::sync::Arc;

use crate::application::dto::{PaymentLineKind, PaymentStatusLineDto};
use crate::application::ports::{AuthPort, AuthState, PaymentGatewayPort, SettingsPort};
use crate::application::services::{PaymentResolution, PaymentStatusResolver};
use crate::domain::eligibility::{MessageLink, Severity, UserMessage};
use crate::domain::shared::SessionId;

const FINAL_REGISTRATION_LINK_LABEL: &str = "Final registration and payment";

/// Use case rendering the personal page payment line.
pub struct PaymentStatusSummaryUseCase<A, S, G>
where
    A: AuthPort,
    S: SettingsPort,
    G: PaymentGatewayPort,
{
    auth: Arc<A>,
    settings: Arc<S>,
    resolver: Arc<PaymentStatusResolver<G>>,
}

impl<A, S, G> PaymentStatusSummaryUseCase<A, S, G>
where
    A: AuthPort,
    S: SettingsPort,
    G: PaymentGatewayPort,
{
    /// Create a new PaymentStatusSummaryUseCase.
    pub const fn new(auth: Arc<A>, settings: Arc<S>, resolver: Arc<PaymentStatusResolver<G>>) -> Self {
        Self {
            auth,
            settings,
            resolver,
        }
    }

    /// Build the payment line, `None` when the user is not a participant.
    pub async fn execute(&self, session: Option<&SessionId>) -> Option<PaymentStatusLineDto> {
        let session = session?;
        let AuthState::Authenticated {
            status,
            participant: Some(participant),
        } = self.auth.current_user(session).await
        else {
            return None;
        };
        if !status.is_participant() {
            return None;
        }

        let settings = self.settings.registration_settings().await;
        if !settings.final_registration_enabled {
            return Some(PaymentStatusLineDto {
                kind: PaymentLineKind::ModuleDisabled,
                payment: "Payment: none".to_string(),
                status: "(Final registration and payment has not started yet)".to_string(),
                details: Vec::new(),
            });
        }

        let final_registration =
            MessageLink::new(FINAL_REGISTRATION_LINK_LABEL, settings.links.final_registration.clone());

        let line = match self.resolver.resolve(participant.order_id()).await {
            PaymentResolution::NoOrder => PaymentStatusLineDto {
                kind: PaymentLineKind::NoOrder,
                payment: "Payment: none".to_string(),
                status: format!("(Please go to {FINAL_REGISTRATION_LINK_LABEL})"),
                details: vec![UserMessage::new(Severity::Info, FINAL_REGISTRATION_LINK_LABEL)
                    .with_link(final_registration)],
            },
            PaymentResolution::GatewayUnavailable { .. } => PaymentStatusLineDto {
                kind: PaymentLineKind::GatewayUnavailable,
                payment: "Payment information is currently unavailable".to_string(),
                status: String::new(),
                details: Vec::new(),
            },
            PaymentResolution::Resolved { labels, .. } => {
                let details = labels
                    .advice
                    .map(|advice| {
                        let mut lines: Vec<UserMessage> = advice
                            .lines()
                            .iter()
                            .map(|line| UserMessage::new(Severity::Info, *line))
                            .collect();
                        lines.push(
                            UserMessage::new(Severity::Info, advice.link_line())
                                .with_link(final_registration.clone()),
                        );
                        lines
                    })
                    .unwrap_or_default();

                PaymentStatusLineDto {
                    kind: PaymentLineKind::Resolved,
                    payment: labels.method.text().to_string(),
                    status: labels.status.text().to_string(),
                    details,
                }
            }
        };

        tracing::debug!(
            participant_id = %participant.id,
            kind = ?line.kind,
            "Built payment status line"
        );

        Some(line)
    }
}
