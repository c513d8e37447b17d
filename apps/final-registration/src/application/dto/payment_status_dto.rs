//! Dashboard payment line DTO.

use serde::{Deserialize, Serialize};

use crate::domain::eligibility::UserMessage;

/// Which branch produced a payment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentLineKind {
    /// Final registration is switched off.
    ModuleDisabled,
    /// No order yet.
    NoOrder,
    /// The payment service returned nothing.
    GatewayUnavailable,
    /// Order found.
    Resolved,
}

/// The payment line on the personal page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatusLineDto {
    /// Branch taken.
    pub kind: PaymentLineKind,
    /// Payment method part, e.g. "Payment: bank transfer".
    pub payment: String,
    /// Status part, e.g. "(your payment has been confirmed)". May be empty.
    pub status: String,
    /// Extra lines below the main line.
    pub details: Vec<UserMessage>,
}

impl PaymentStatusLineDto {
    /// Main line as displayed: payment and status joined by a space.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} {}", self.payment, self.status).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_trimmed_when_status_empty() {
        let dto = PaymentStatusLineDto {
            kind: PaymentLineKind::GatewayUnavailable,
            payment: "Payment information is currently unavailable".to_string(),
            status: String::new(),
            details: Vec::new(),
        };
        assert_eq!(dto.line(), "Payment information is currently unavailable");
    }
}
