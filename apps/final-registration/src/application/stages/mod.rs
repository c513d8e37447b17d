//! Wizard Stages
//!
//! Each stage validates its input against the current data and submits the
//! validated value. The controller decides which stage runs and what happens
//! to the wizard session afterwards.

mod main_stage;
mod overview_stage;

use async_trait::async_trait;

use crate::domain::eligibility::Admission;
use crate::domain::wizard::{ValidationErrors, WizardSession};

pub use main_stage::MainStage;
pub use overview_stage::{OverviewInput, OverviewStage};

/// Capability shared by the wizard stages.
#[async_trait]
pub trait WizardStep: Send + Sync {
    /// Raw input of the stage.
    type Input: Send + Sync;
    /// Input after validation.
    type Validated: Send;
    /// Result of a successful submit.
    type Output: Send;
    /// Submit failure.
    type Error: std::error::Error + Send;

    /// Validate the input. Must not have side effects.
    fn validate(
        &self,
        session: &WizardSession,
        admission: &Admission,
        input: &Self::Input,
    ) -> Result<Self::Validated, ValidationErrors>;

    /// Submit validated input.
    async fn submit(
        &self,
        session: &WizardSession,
        validated: Self::Validated,
    ) -> Result<Self::Output, Self::Error>;
}
