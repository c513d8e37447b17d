//! Wizard Session Repository Trait
//!
//! Session-scoped persistence of the wizard state.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::errors::SessionStoreError;
use super::value_objects::WizardSession;
use crate::domain::shared::SessionId;

/// Repository for wizard sessions, keyed by browser session.
///
/// Concurrent writes for the same session are last-write-wins.
#[async_trait]
pub trait WizardSessionRepository: Send + Sync {
    /// Load the wizard session, if one exists.
    async fn load(&self, session: &SessionId) -> Result<Option<WizardSession>, SessionStoreError>;

    /// Replace the wizard session.
    async fn save(&self, session: &SessionId, state: &WizardSession) -> Result<(), SessionStoreError>;
}
