//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod payment_status_dto;
mod wizard_dto;

pub use payment_status_dto::{PaymentLineKind, PaymentStatusLineDto};
pub use wizard_dto::{CommitResultDto, WizardResponseDto, WizardSubmissionDto, WizardViewDto};
