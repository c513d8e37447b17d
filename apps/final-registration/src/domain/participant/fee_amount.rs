//! Selectable fee tiers.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{FeeAmountId, Money};

/// One selectable price tier of the conference fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeAmount {
    /// Identifier of the tier.
    pub id: FeeAmountId,
    /// Human-readable description (e.g. "Student, full conference").
    pub description: String,
    /// Price of the tier.
    pub amount: Money,
}

impl FeeAmount {
    /// Create a new fee amount.
    #[must_use]
    pub fn new(id: FeeAmountId, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }

    /// Find a fee amount by id in a set of tiers.
    #[must_use]
    pub fn find(amounts: &[Self], id: FeeAmountId) -> Option<&Self> {
        amounts.iter().find(|fee| fee.id == id)
    }
}
