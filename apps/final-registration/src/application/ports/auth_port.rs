//! Auth Port (Driven Port)
//!
//! Who is behind a request. Authentication itself happens elsewhere.

use async_trait::async_trait;

use crate::domain::participant::{Participant, RegistrationStatus};
use crate::domain::shared::SessionId;

/// Login state of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Nobody is logged in.
    Anonymous,
    /// A user is logged in.
    Authenticated {
        /// Where the user stands in the registration process.
        status: RegistrationStatus,
        /// The participant record, when the user is (pre-)registered.
        participant: Option<Participant>,
    },
}

/// Port for looking up the logged-in user.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Resolve the user behind a session.
    async fn current_user(&self, session: &SessionId) -> AuthState;
}
