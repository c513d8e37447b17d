//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that runs the eligibility gate and delegates to the
//! wizard and payment status use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};

use crate::application::ports::{
    AuthPort, FeeStatePort, PaymentGatewayPort, RegistrationCommitPort, SettingsPort,
};
use crate::application::use_cases::{EligibilityGate, PaymentStatusSummaryUseCase, WizardController};
use crate::domain::eligibility::{Admission, Block, EligibilityOutcome};
use crate::domain::shared::SessionId;
use crate::domain::wizard::WizardSessionRepository;
use crate::error::ApiError;

use super::request::{WizardFormRequest, session_from_headers};
use super::response::{BlockedResponse, HealthResponse, PaymentStatusResponse};

/// Application state shared across handlers.
pub struct AppState<A, S, F, G, W, C>
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    /// Preconditions for entering the wizard.
    pub gate: Arc<EligibilityGate<A, S, F, G>>,
    /// Wizard state machine.
    pub wizard: Arc<WizardController<W, C>>,
    /// Personal page payment line.
    pub payment_status: Arc<PaymentStatusSummaryUseCase<A, S, G>>,
    /// Application version.
    pub version: String,
}

impl<A, S, F, G, W, C> Clone for AppState<A, S, F, G, W, C>
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
            wizard: Arc::clone(&self.wizard),
            payment_status: Arc::clone(&self.payment_status),
            version: self.version.clone(),
        }
    }
}

impl<A, S, F, G, W, C> AppState<A, S, F, G, W, C>
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    /// Run the gate. `Err` carries the response to send instead of the wizard.
    async fn admit(&self, headers: &HeaderMap) -> Result<(SessionId, Admission), Response> {
        let session = session_from_headers(headers);
        match self.gate.check(session.as_ref(), today()).await {
            EligibilityOutcome::Allowed(admission) => session
                .map(|session| (session, admission))
                .ok_or_else(|| ApiError::internal("admitted without a session").into_response()),
            EligibilityOutcome::Blocked(block) => Err(blocked_response(block)),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<A, S, F, G, W, C>(state: AppState<A, S, F, G, W, C>) -> Router
where
    A: AuthPort + 'static,
    S: SettingsPort + 'static,
    F: FeeStatePort + 'static,
    G: PaymentGatewayPort + 'static,
    W: WizardSessionRepository + 'static,
    C: RegistrationCommitPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/final-registration", get(show_wizard).post(submit_wizard))
        .route("/api/v1/personal-page/payment-status", get(payment_status))
        .with_state(state)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn blocked_response(block: Block) -> Response {
    if let Some(location) = block.redirect {
        return Redirect::to(&location).into_response();
    }
    (
        StatusCode::OK,
        Json(BlockedResponse {
            blocked: true,
            reason: block.reason,
            message: block.message,
        }),
    )
        .into_response()
}

/// Health check endpoint.
async fn health_check<A, S, F, G, W, C>(
    State(state): State<AppState<A, S, F, G, W, C>>,
) -> impl IntoResponse
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Show the current wizard stage.
async fn show_wizard<A, S, F, G, W, C>(
    State(state): State<AppState<A, S, F, G, W, C>>,
    headers: HeaderMap,
) -> Response
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    let (session, admission) = match state.admit(&headers).await {
        Ok(admitted) => admitted,
        Err(response) => return response,
    };

    match state.wizard.view(&session, &admission).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => {
            tracing::error!(session_id = %session, error = %e, "Failed to show wizard");
            ApiError::from(e).into_response()
        }
    }
}

/// Submit a wizard form.
async fn submit_wizard<A, S, F, G, W, C>(
    State(state): State<AppState<A, S, F, G, W, C>>,
    headers: HeaderMap,
    body: Result<Json<WizardFormRequest>, JsonRejection>,
) -> Response
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    let (session, admission) = match state.admit(&headers).await {
        Ok(admitted) => admitted,
        Err(response) => return response,
    };

    let Json(form) = match body {
        Ok(form) => form,
        Err(rejection) => {
            return ApiError::invalid_request(rejection.body_text()).into_response();
        }
    };

    match state.wizard.submit(&session, &admission, form.into()).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::warn!(session_id = %session, error = %e, "Wizard request failed");
            ApiError::from(e).into_response()
        }
    }
}

/// Personal page payment line.
async fn payment_status<A, S, F, G, W, C>(
    State(state): State<AppState<A, S, F, G, W, C>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    A: AuthPort,
    S: SettingsPort,
    F: FeeStatePort,
    G: PaymentGatewayPort,
    W: WizardSessionRepository,
    C: RegistrationCommitPort,
{
    let session = session_from_headers(&headers);
    let line = state.payment_status.execute(session.as_ref()).await;
    Json(PaymentStatusResponse::from(line))
}
