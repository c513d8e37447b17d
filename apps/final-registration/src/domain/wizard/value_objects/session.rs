//! Wizard session state.

use serde::{Deserialize, Serialize};

use super::{RegistrationSelection, WizardStage};

/// Per-session wizard state. Replaced, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSession {
    /// Current stage.
    pub stage: WizardStage,
    /// Selection stored by the main stage.
    pub selection: Option<RegistrationSelection>,
}

impl WizardSession {
    /// Copy of this session on another stage.
    #[must_use]
    pub fn with_stage(&self, stage: WizardStage) -> Self {
        Self {
            stage,
            selection: self.selection.clone(),
        }
    }

    /// Copy of this session holding a new selection.
    #[must_use]
    pub fn with_selection(&self, selection: RegistrationSelection) -> Self {
        Self {
            stage: self.stage,
            selection: Some(selection),
        }
    }
}
