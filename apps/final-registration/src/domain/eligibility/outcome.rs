//! Eligibility outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserMessage;
use crate::domain::participant::{FeeAmount, Participant};

/// Why a request was not allowed into the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockReason {
    /// No logged-in user. The only reason that redirects.
    NotAuthenticated,
    /// User is not (pre-)registered as participant.
    NotRegistered,
    /// Deadline has passed.
    RegistrationClosed,
    /// Participant has no fee amounts.
    FeeMisconfigured,
    /// Accompanying persons are enabled but their fee set is missing or empty.
    AccompanyingPersonFeeMisconfigured,
    /// The payment service did not answer.
    GatewayUnavailable,
    /// The order is already paid.
    AlreadyCompleted,
}

impl BlockReason {
    /// Returns true if the block is a configuration problem on the organizers' side.
    #[must_use]
    pub const fn is_fee_problem(&self) -> bool {
        matches!(
            self,
            Self::FeeMisconfigured | Self::AccompanyingPersonFeeMisconfigured
        )
    }

    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotAuthenticated => "not_authenticated",
            Self::NotRegistered => "not_registered",
            Self::RegistrationClosed => "registration_closed",
            Self::FeeMisconfigured => "fee_misconfigured",
            Self::AccompanyingPersonFeeMisconfigured => "accompanying_person_fee_misconfigured",
            Self::GatewayUnavailable => "gateway_unavailable",
            Self::AlreadyCompleted => "already_completed",
        }
    }
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "NOT_AUTHENTICATED"),
            Self::NotRegistered => write!(f, "NOT_REGISTERED"),
            Self::RegistrationClosed => write!(f, "REGISTRATION_CLOSED"),
            Self::FeeMisconfigured => write!(f, "FEE_MISCONFIGURED"),
            Self::AccompanyingPersonFeeMisconfigured => {
                write!(f, "ACCOMPANYING_PERSON_FEE_MISCONFIGURED")
            }
            Self::GatewayUnavailable => write!(f, "GATEWAY_UNAVAILABLE"),
            Self::AlreadyCompleted => write!(f, "ALREADY_COMPLETED"),
        }
    }
}

/// A participant admitted into the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    /// The admitted participant.
    pub participant: Participant,
    /// Whether the accompanying persons feature is enabled.
    pub accompanying_persons_enabled: bool,
    /// Fee set for accompanying persons (non-empty when the feature is enabled).
    pub accompanying_fee_amounts: Vec<FeeAmount>,
    /// Advisory banner to show above the wizard.
    pub banner: Option<UserMessage>,
}

/// A blocked request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Why the request was blocked.
    pub reason: BlockReason,
    /// Message to show instead of the wizard.
    pub message: Option<UserMessage>,
    /// Where to send the user instead (login only).
    pub redirect: Option<String>,
}

impl Block {
    /// A block that renders a message.
    #[must_use]
    pub const fn with_message(reason: BlockReason, message: UserMessage) -> Self {
        Self {
            reason,
            message: Some(message),
            redirect: None,
        }
    }

    /// A block that redirects.
    #[must_use]
    pub const fn redirect(reason: BlockReason, location: String) -> Self {
        Self {
            reason,
            message: None,
            redirect: Some(location),
        }
    }
}

/// Result of the eligibility gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityOutcome {
    /// Enter the wizard.
    Allowed(Admission),
    /// Do not enter the wizard.
    Blocked(Block),
}

impl EligibilityOutcome {
    /// Returns true if the wizard may be entered.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// The block reason, if blocked.
    #[must_use]
    pub const fn block_reason(&self) -> Option<BlockReason> {
        match self {
            Self::Allowed(_) => None,
            Self::Blocked(block) => Some(block.reason),
        }
    }

    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Allowed(admission) if admission.banner.is_some() => "allowed_with_banner",
            Self::Allowed(_) => "allowed",
            Self::Blocked(block) => block.reason.as_str(),
        }
    }
}
