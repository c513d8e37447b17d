//! Registration Commit Port (Driven Port)
//!
//! The only place where a payment order is created.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::participant::Participant;
use crate::domain::payment::PaymentMethod;
use crate::domain::shared::{OrderId, ParticipantId};
use crate::domain::wizard::RegistrationSummary;

/// Everything needed to create the order for a final registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    /// Participant being registered.
    pub participant_id: ParticipantId,
    /// Participant's display name.
    pub participant_name: String,
    /// Chosen fees and total.
    pub summary: RegistrationSummary,
    /// How the participant wants to pay.
    pub payment_method: PaymentMethod,
}

impl CommitRequest {
    /// Build a commit request for a participant.
    #[must_use]
    pub fn new(participant: &Participant, summary: RegistrationSummary, payment_method: PaymentMethod) -> Self {
        Self {
            participant_id: participant.id,
            participant_name: participant.name.clone(),
            summary,
            payment_method,
        }
    }
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReceipt {
    /// The order created for the registration.
    pub order_id: OrderId,
    /// Where to send the participant to pay online, if applicable.
    pub payment_url: Option<String>,
}

/// Commit port error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CommitError {
    /// The backend refused the registration.
    #[error("Registration rejected: {reason}")]
    Rejected {
        /// Rejection reason.
        reason: String,
    },

    /// The backend could not be reached.
    #[error("Registration backend unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The backend answered with something unusable.
    #[error("Invalid registration backend response: {message}")]
    InvalidResponse {
        /// Error details.
        message: String,
    },
}

impl CommitError {
    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "rejected",
            Self::Unavailable { .. } | Self::InvalidResponse { .. } => "unavailable",
        }
    }
}

/// Port for committing a final registration.
#[async_trait]
pub trait RegistrationCommitPort: Send + Sync {
    /// Create the order for a registration.
    async fn commit(&self, request: &CommitRequest) -> Result<CommitReceipt, CommitError>;
}
