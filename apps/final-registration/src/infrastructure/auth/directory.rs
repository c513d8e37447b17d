//! Session directory loaded from YAML.
//!
//! ```yaml
//! sessions:
//!   3f9c2a:
//!     status: CONFIRMED
//!     participant:
//!       id: 7
//!       name: Ada Lovelace
//!       payment_id: 0
//!       fee_amounts:
//!         - { id: 1, description: Regular, amount: "120.00" }
//! ```

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::{AuthPort, AuthState};
use crate::domain::participant::{Participant, RegistrationStatus};
use crate::domain::shared::SessionId;

/// Errors loading the session directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory file could not be read.
    #[error("Failed to read directory file '{path}': {source}")]
    Read {
        /// Path to the file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The directory file is not valid YAML.
    #[error("Failed to parse directory YAML: {0}")]
    Parse(#[from] serde_yaml_bw::Error),
}

/// A logged-in user as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Registration standing.
    #[serde(default)]
    pub status: RegistrationStatus,
    /// Participant record, if the user is (pre-)registered.
    #[serde(default)]
    pub participant: Option<Participant>,
}

#[derive(Debug, Default, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    sessions: HashMap<String, UserRecord>,
}

/// Auth adapter backed by a fixed session table.
///
/// Sessions missing from the table are anonymous.
#[derive(Debug, Default)]
pub struct InMemoryAuthProvider {
    sessions: HashMap<SessionId, UserRecord>,
}

impl InMemoryAuthProvider {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a directory from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, DirectoryError> {
        let file: DirectoryFile = serde_yaml_bw::from_str(yaml)?;
        let mut provider = Self::new();
        for (raw, record) in file.sessions {
            if let Some(session) = SessionId::parse(&raw) {
                provider.sessions.insert(session, record);
            } else {
                tracing::warn!("Skipping blank session id in directory");
            }
        }
        Ok(provider)
    }

    /// Load a directory file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Add or replace a session.
    #[must_use]
    pub fn with_session(mut self, session: SessionId, record: UserRecord) -> Self {
        self.sessions.insert(session, record);
        self
    }

    /// Number of known sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if no sessions are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl AuthPort for InMemoryAuthProvider {
    async fn current_user(&self, session: &SessionId) -> AuthState {
        self.sessions
            .get(session)
            .map_or(AuthState::Anonymous, |record| AuthState::Authenticated {
                status: record.status,
                participant: record.participant.clone(),
            })
    }
}
