//! Participant Bounded Context
//!
//! The person going through final registration, the fee amounts that apply
//! to them, and their standing in the registration process.

mod entity;
mod fee_amount;
mod registration_status;

pub use entity::Participant;
pub use fee_amount::FeeAmount;
pub use registration_status::RegistrationStatus;
