//! Participant entity.

use serde::{Deserialize, Serialize};

use super::FeeAmount;
use crate::domain::shared::{FeeAmountId, OrderId, ParticipantId};

/// A conference participant as seen by final registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant identifier.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Fee tiers that apply to this participant.
    #[serde(default)]
    pub fee_amounts: Vec<FeeAmount>,
    /// Raw payment id stored for the participant (`0` when no order exists).
    #[serde(default)]
    pub payment_id: u64,
    /// Names of accompanying persons registered so far.
    #[serde(default)]
    pub accompanying_persons: Vec<String>,
}

impl Participant {
    /// The order created for this participant, if any.
    #[must_use]
    pub const fn order_id(&self) -> Option<OrderId> {
        OrderId::from_raw(self.payment_id)
    }

    /// Returns true if at least one fee amount applies.
    #[must_use]
    pub fn is_payable(&self) -> bool {
        !self.fee_amounts.is_empty()
    }

    /// Look up one of the participant's fee tiers.
    #[must_use]
    pub fn fee_amount(&self, id: FeeAmountId) -> Option<&FeeAmount> {
        FeeAmount::find(&self.fee_amounts, id)
    }
}
