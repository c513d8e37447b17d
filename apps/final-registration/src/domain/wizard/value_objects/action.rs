//! Wizard action.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::wizard::errors::WizardError;

/// Action triggered by the user on the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardAction {
    /// Move forward.
    Next,
    /// Move back.
    Back,
    /// The stage's default submit button.
    Confirm,
}

impl WizardAction {
    /// Parse the raw action identifier of a request.
    ///
    /// An absent or blank identifier is the stage default ([`WizardAction::Confirm`]).
    pub fn parse(raw: Option<&str>) -> Result<Self, WizardError> {
        let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::Confirm);
        };
        match value.to_ascii_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "back" => Ok(Self::Back),
            "confirm" => Ok(Self::Confirm),
            _ => Err(WizardError::InvalidAction {
                action: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "NEXT"),
            Self::Back => write!(f, "BACK"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}
