//! Overview of the chosen fees.

use serde::{Deserialize, Serialize};

use super::RegistrationSelection;
use crate::domain::participant::FeeAmount;
use crate::domain::shared::Money;

/// Fees and total shown on the overview stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSummary {
    /// The participant's own fee.
    pub fee: FeeAmount,
    /// Accompanying persons, in entry order.
    pub accompanying_persons: Vec<String>,
    /// Fee charged per accompanying person.
    pub accompanying_fee: Option<FeeAmount>,
    /// Amount due in total.
    pub total: Money,
}

impl RegistrationSummary {
    /// Compute the summary of a selection.
    ///
    /// Returns `None` if a selected tier no longer exists in the given sets.
    #[must_use]
    pub fn compute(
        selection: &RegistrationSelection,
        fee_amounts: &[FeeAmount],
        accompanying_fee_amounts: &[FeeAmount],
    ) -> Option<Self> {
        let fee = FeeAmount::find(fee_amounts, selection.fee_amount_id)?.clone();
        let accompanying_fee = match selection.accompanying_fee_amount_id {
            Some(id) => Some(FeeAmount::find(accompanying_fee_amounts, id)?.clone()),
            None => None,
        };

        let count = u32::try_from(selection.accompanying_persons.len()).ok()?;
        let accompanying_total = accompanying_fee
            .as_ref()
            .map_or(Money::ZERO, |f| f.amount * count);

        Some(Self {
            total: fee.amount + accompanying_total,
            fee,
            accompanying_persons: selection.accompanying_persons.clone(),
            accompanying_fee,
        })
    }
}
