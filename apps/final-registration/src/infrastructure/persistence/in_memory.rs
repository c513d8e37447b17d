//! In-memory wizard session store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::shared::SessionId;
use crate::domain::wizard::{SessionStoreError, WizardSession, WizardSessionRepository};

/// In-memory implementation of `WizardSessionRepository`.
///
/// State lives as long as the process. Concurrent writes for one session are
/// last-write-wins.
#[derive(Debug, Default)]
pub struct InMemoryWizardSessionStore {
    sessions: RwLock<HashMap<SessionId, WizardSession>>,
}

impl InMemoryWizardSessionStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().map_or(0, |s| s.len())
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> SessionStoreError {
    SessionStoreError::Unavailable("session lock poisoned".to_string())
}

#[async_trait]
impl WizardSessionRepository for InMemoryWizardSessionStore {
    async fn load(&self, session: &SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(session).cloned())
    }

    async fn save(&self, session: &SessionId, state: &WizardSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.insert(session.clone(), state.clone());
        Ok(())
    }
}
