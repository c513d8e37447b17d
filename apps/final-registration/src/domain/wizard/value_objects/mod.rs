//! Wizard value objects.

mod action;
mod selection;
mod session;
mod stage;
mod summary;
mod validation;

pub use action::WizardAction;
pub use selection::{RegistrationSelection, SelectionDraft};
pub use session::WizardSession;
pub use stage::WizardStage;
pub use summary::RegistrationSummary;
pub use validation::ValidationErrors;
