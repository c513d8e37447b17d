//! Wizard stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of the final registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStage {
    /// Fee and option selection.
    #[default]
    Main,
    /// Review and confirmation.
    Overview,
}

impl fmt::Display for WizardStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "MAIN"),
            Self::Overview => write!(f, "OVERVIEW"),
        }
    }
}
