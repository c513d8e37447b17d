//! Use Cases
//!
//! Application-specific business rules that orchestrate domain logic.

mod eligibility_gate;
mod payment_status_summary;
mod wizard_controller;

pub use eligibility_gate::{EligibilityGate, login_redirect};
pub use payment_status_summary::PaymentStatusSummaryUseCase;
pub use wizard_controller::WizardController;
