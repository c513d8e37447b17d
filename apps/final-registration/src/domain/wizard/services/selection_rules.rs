//! Selection validation shared by both wizard stages.

use crate::domain::participant::{FeeAmount, Participant};
use crate::domain::wizard::value_objects::{RegistrationSelection, SelectionDraft, ValidationErrors};

/// Field name of the participant's fee.
pub const FIELD_FEE_AMOUNT: &str = "fee_amount";
/// Field name of the accompanying persons list.
pub const FIELD_ACCOMPANYING_PERSONS: &str = "accompanying_persons";
/// Field name of the accompanying person fee.
pub const FIELD_ACCOMPANYING_FEE_AMOUNT: &str = "accompanying_fee_amount";

/// Current data a selection is checked against.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// The participant making the selection.
    pub participant: &'a Participant,
    /// Whether accompanying persons may be registered.
    pub accompanying_persons_enabled: bool,
    /// Fee tiers for accompanying persons.
    pub accompanying_fee_amounts: &'a [FeeAmount],
}

/// Validation rules for a registration selection.
pub struct SelectionRules;

impl SelectionRules {
    /// Validate a draft into a selection.
    pub fn validate(
        draft: &SelectionDraft,
        ctx: &SelectionContext<'_>,
    ) -> Result<RegistrationSelection, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fee_amount_id = match draft.fee_amount_id {
            None => {
                errors.add(FIELD_FEE_AMOUNT, "Please select a fee.");
                None
            }
            Some(id) if ctx.participant.fee_amount(id).is_none() => {
                errors.add(FIELD_FEE_AMOUNT, "The selected fee is not available.");
                None
            }
            Some(id) => Some(id),
        };

        let persons: Vec<String> = draft
            .accompanying_persons
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        let mut accompanying_fee_amount_id = None;
        if !persons.is_empty() {
            if !ctx.accompanying_persons_enabled {
                errors.add(
                    FIELD_ACCOMPANYING_PERSONS,
                    "Accompanying persons cannot be registered for this conference.",
                );
            } else {
                match draft.accompanying_fee_amount_id {
                    None => errors.add(
                        FIELD_ACCOMPANYING_FEE_AMOUNT,
                        "Please select a fee for your accompanying persons.",
                    ),
                    Some(id) if FeeAmount::find(ctx.accompanying_fee_amounts, id).is_none() => {
                        errors.add(
                            FIELD_ACCOMPANYING_FEE_AMOUNT,
                            "The selected fee for accompanying persons is not available.",
                        );
                    }
                    Some(id) => accompanying_fee_amount_id = Some(id),
                }
            }
        }

        match fee_amount_id {
            Some(fee_amount_id) if errors.is_empty() => Ok(RegistrationSelection {
                fee_amount_id,
                accompanying_persons: persons,
                accompanying_fee_amount_id,
            }),
            _ => Err(errors),
        }
    }
}
