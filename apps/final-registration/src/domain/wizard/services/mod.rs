//! Wizard domain services.

mod selection_rules;
mod state_machine;

pub use selection_rules::{SelectionContext, SelectionRules};
pub use state_machine::{WizardRoute, WizardStateMachine};
