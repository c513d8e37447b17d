//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`participant`]: Participants, their fee amounts and registration standing
//! - [`payment`]: Orders held by the payment service and their readable labels
//! - [`eligibility`]: Outcome of the preconditions for entering the wizard
//! - [`wizard`]: Two-stage final registration state machine

pub mod eligibility;
pub mod participant;
pub mod payment;
pub mod shared;
pub mod wizard;
