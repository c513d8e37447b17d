//! Wizard State Machine Service
//!
//! Routes a `(stage, action)` pair to what the controller has to do.
//!
//! | stage    | action           | route      |
//! |----------|------------------|------------|
//! | Main     | Next             | `Advance`  |
//! | Main     | Back, Confirm    | `SaveMain` |
//! | Overview | Back             | `Rewind`   |
//! | Overview | Next, Confirm    | `Commit`   |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::wizard::value_objects::{WizardAction, WizardStage};

/// What the controller does for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardRoute {
    /// Validate and submit the main stage, then move to the overview.
    Advance,
    /// Validate and submit the main stage, staying on it.
    SaveMain,
    /// Go back to the main stage without validating or submitting.
    Rewind,
    /// Validate the overview and commit the registration.
    Commit,
}

impl WizardRoute {
    /// Stage the wizard is on after the route succeeded.
    #[must_use]
    pub const fn target_stage(&self) -> WizardStage {
        match self {
            Self::Advance | Self::Commit => WizardStage::Overview,
            Self::SaveMain | Self::Rewind => WizardStage::Main,
        }
    }

    /// Whether the page must be rebuilt for a new stage.
    #[must_use]
    pub const fn rebuilds(&self) -> bool {
        matches!(self, Self::Advance | Self::Rewind)
    }

    /// Stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::SaveMain => "save_main",
            Self::Rewind => "rewind",
            Self::Commit => "commit",
        }
    }
}

impl fmt::Display for WizardRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advance => write!(f, "ADVANCE"),
            Self::SaveMain => write!(f, "SAVE_MAIN"),
            Self::Rewind => write!(f, "REWIND"),
            Self::Commit => write!(f, "COMMIT"),
        }
    }
}

/// Wizard State Machine for routing requests.
pub struct WizardStateMachine;

impl WizardStateMachine {
    /// Route an action on a stage.
    #[must_use]
    pub const fn route(stage: WizardStage, action: WizardAction) -> WizardRoute {
        match (stage, action) {
            (WizardStage::Main, WizardAction::Next) => WizardRoute::Advance,
            (WizardStage::Main, WizardAction::Back | WizardAction::Confirm) => WizardRoute::SaveMain,
            (WizardStage::Overview, WizardAction::Back) => WizardRoute::Rewind,
            (WizardStage::Overview, WizardAction::Next | WizardAction::Confirm) => {
                WizardRoute::Commit
            }
        }
    }
}
