//! Registration selection collected on the main stage.

use serde::{Deserialize, Serialize};

use crate::domain::shared::FeeAmountId;

/// Unvalidated input of the main stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDraft {
    /// Chosen fee tier.
    #[serde(default)]
    pub fee_amount_id: Option<FeeAmountId>,
    /// Names of accompanying persons (blank entries are ignored).
    #[serde(default)]
    pub accompanying_persons: Vec<String>,
    /// Chosen fee tier for accompanying persons.
    #[serde(default)]
    pub accompanying_fee_amount_id: Option<FeeAmountId>,
}

/// A validated selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSelection {
    /// Chosen fee tier.
    pub fee_amount_id: FeeAmountId,
    /// Accompanying persons, trimmed and non-blank.
    pub accompanying_persons: Vec<String>,
    /// Fee tier for accompanying persons; present iff there are accompanying persons.
    pub accompanying_fee_amount_id: Option<FeeAmountId>,
}

impl From<&RegistrationSelection> for SelectionDraft {
    fn from(selection: &RegistrationSelection) -> Self {
        Self {
            fee_amount_id: Some(selection.fee_amount_id),
            accompanying_persons: selection.accompanying_persons.clone(),
            accompanying_fee_amount_id: selection.accompanying_fee_amount_id,
        }
    }
}
