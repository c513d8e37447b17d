//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::sync::Arc;

use thiserror::Error;

use crate::application::ports::{
    AuthPort, FeeStatePort, PaymentGatewayPort, RegistrationCommitPort, SettingsPort,
};
use crate::application::services::PaymentStatusResolver;
use crate::application::use_cases::{EligibilityGate, PaymentStatusSummaryUseCase, WizardController};
use crate::config::Config;
use crate::domain::wizard::WizardSessionRepository;
use crate::infrastructure::auth::{DirectoryError, InMemoryAuthProvider};
use crate::infrastructure::http::AppState;
use crate::infrastructure::payway::{PayWayClient, PayWayError};
use crate::infrastructure::persistence::InMemoryWizardSessionStore;
use crate::infrastructure::settings::ConfigSettingsStore;

/// Errors while wiring the production adapters.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The session directory could not be loaded.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The PayWay client could not be built.
    #[error(transparent)]
    PayWay(#[from] PayWayError),
}

/// Container wired with the adapters used by the service binary.
pub type ProductionContainer = Container<
    InMemoryAuthProvider,
    ConfigSettingsStore,
    ConfigSettingsStore,
    PayWayClient,
    InMemoryWizardSessionStore,
    PayWayClient,
>;

/// Dependency injection container.
///
/// Holds all wired ports. Use cases are created on demand and share the
/// ports through `Arc`.
pub struct Container<A, S, F, G, W, C>
where
    A: AuthPort + 'static,
    S: SettingsPort + 'static,
    F: FeeStatePort + 'static,
    G: PaymentGatewayPort + 'static,
    W: WizardSessionRepository + 'static,
    C: RegistrationCommitPort + 'static,
{
    auth: Arc<A>,
    settings: Arc<S>,
    fee_state: Arc<F>,
    gateway: Arc<G>,
    sessions: Arc<W>,
    commit: Arc<C>,
}

impl ProductionContainer {
    /// Wire the production adapters from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ContainerError> {
        let auth = match config.directory.path.as_deref() {
            Some(path) => {
                let provider = InMemoryAuthProvider::from_file(path)?;
                tracing::info!(path, sessions = provider.len(), "Loaded session directory");
                provider
            }
            None => {
                tracing::warn!("No session directory configured, every request is anonymous");
                InMemoryAuthProvider::new()
            }
        };

        let settings = Arc::new(ConfigSettingsStore::from_config(config));
        let payway = Arc::new(PayWayClient::new(&config.payway)?);

        Ok(Self::new(
            Arc::new(auth),
            Arc::clone(&settings),
            settings,
            Arc::clone(&payway),
            Arc::new(InMemoryWizardSessionStore::new()),
            payway,
        ))
    }
}

impl<A, S, F, G, W, C> Container<A, S, F, G, W, C>
where
    A: AuthPort + 'static,
    S: SettingsPort + 'static,
    F: FeeStatePort + 'static,
    G: PaymentGatewayPort + 'static,
    W: WizardSessionRepository + 'static,
    C: RegistrationCommitPort + 'static,
{
    /// Create a new container with all dependencies.
    pub const fn new(
        auth: Arc<A>,
        settings: Arc<S>,
        fee_state: Arc<F>,
        gateway: Arc<G>,
        sessions: Arc<W>,
        commit: Arc<C>,
    ) -> Self {
        Self {
            auth,
            settings,
            fee_state,
            gateway,
            sessions,
            commit,
        }
    }

    /// Get the wizard session store.
    pub fn sessions(&self) -> Arc<W> {
        Arc::clone(&self.sessions)
    }

    /// Create a `PaymentStatusResolver`.
    pub fn payment_status_resolver(&self) -> PaymentStatusResolver<G> {
        PaymentStatusResolver::new(Arc::clone(&self.gateway))
    }

    /// Create an `EligibilityGate`.
    pub fn eligibility_gate(&self) -> EligibilityGate<A, S, F, G> {
        EligibilityGate::new(
            Arc::clone(&self.auth),
            Arc::clone(&self.settings),
            Arc::clone(&self.fee_state),
            Arc::new(self.payment_status_resolver()),
        )
    }

    /// Create a `WizardController`.
    pub fn wizard_controller(&self) -> WizardController<W, C> {
        WizardController::new(Arc::clone(&self.sessions), Arc::clone(&self.commit))
    }

    /// Create a `PaymentStatusSummaryUseCase`.
    pub fn payment_status_summary(&self) -> PaymentStatusSummaryUseCase<A, S, G> {
        PaymentStatusSummaryUseCase::new(
            Arc::clone(&self.auth),
            Arc::clone(&self.settings),
            Arc::new(self.payment_status_resolver()),
        )
    }

    /// Build the HTTP application state.
    pub fn app_state(&self, version: impl Into<String>) -> AppState<A, S, F, G, W, C> {
        AppState {
            gate: Arc::new(self.eligibility_gate()),
            wizard: Arc::new(self.wizard_controller()),
            payment_status: Arc::new(self.payment_status_summary()),
            version: version.into(),
        }
    }
}
