//! Wizard Bounded Context
//!
//! The two-stage final registration wizard: the participant picks a fee on
//! the main stage, reviews it on the overview stage and confirms.
//!
//! # Key Concepts
//!
//! - **WizardSession**: stage plus the selection collected so far, scoped to a browser session
//! - **WizardStateMachine**: pure routing of `(stage, action)` pairs
//! - **SelectionRules**: field validation shared by both stages

pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use errors::{SessionStoreError, WizardError};
pub use repository::WizardSessionRepository;
pub use services::{SelectionContext, SelectionRules, WizardRoute, WizardStateMachine};
pub use value_objects::{
    RegistrationSelection, RegistrationSummary, SelectionDraft, ValidationErrors, WizardAction,
    WizardSession, WizardStage,
};
