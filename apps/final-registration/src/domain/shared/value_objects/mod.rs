//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.

mod identifiers;
mod money;

pub use identifiers::{FeeAmountId, OrderId, ParticipantId, SessionId};
pub use money::Money;
