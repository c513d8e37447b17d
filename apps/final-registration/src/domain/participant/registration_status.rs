//! Registration standing of a user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a logged-in user stands in the registration process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    /// Pre-registered and confirmed by the organizers.
    Confirmed,
    /// Pre-registered, confirmation still pending.
    WithoutConfirmation,
    /// Not pre-registered at all.
    #[default]
    NotRegistered,
}

impl RegistrationStatus {
    /// Returns true if the user counts as a participant for final registration.
    #[must_use]
    pub const fn is_participant(&self) -> bool {
        matches!(self, Self::Confirmed | Self::WithoutConfirmation)
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::WithoutConfirmation => write!(f, "WITHOUT_CONFIRMATION"),
            Self::NotRegistered => write!(f, "NOT_REGISTERED"),
        }
    }
}
