//! Eligibility Bounded Context
//!
//! Result of the precondition chain that runs before the wizard: either the
//! participant is admitted (possibly with an advisory banner) or the request
//! is blocked with a user-facing message.

mod deadline;
mod message;
mod outcome;

pub use deadline::RegistrationDeadline;
pub use message::{MessageLink, Severity, UserMessage};
pub use outcome::{Admission, Block, BlockReason, EligibilityOutcome};
