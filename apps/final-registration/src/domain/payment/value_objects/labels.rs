//! Readable payment labels.

use serde::{Deserialize, Serialize};

/// Label describing the payment method of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MethodLabel {
    /// "online payment"
    OnlinePayment,
    /// "bank transfer"
    BankTransfer,
    /// "on site"
    OnSite,
    /// "unknown"
    Unknown,
}

impl MethodLabel {
    /// Line shown to the participant.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::OnlinePayment => "Payment: online payment",
            Self::BankTransfer => "Payment: bank transfer",
            Self::OnSite => "Payment: on site",
            Self::Unknown => "Payment unknown",
        }
    }
}

/// Label describing how far the payment has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusLabel {
    /// Payment has not been confirmed yet.
    NotYetConfirmed,
    /// Payment has been confirmed.
    Confirmed,
    /// Payment has been refunded.
    Refunded,
    /// Payment status cannot be determined.
    Unknown,
}

impl StatusLabel {
    /// Line shown to the participant.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::NotYetConfirmed => "(your payment has not yet been confirmed)",
            Self::Confirmed => "(your payment has been confirmed)",
            Self::Refunded => "(your payment has been refunded)",
            Self::Unknown => "(status of your payment is unknown)",
        }
    }
}

/// Extra advice attached to some payment states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentAdvice {
    /// Bank transfer pending: wait for confirmation or pay online instead.
    AwaitBankConfirmation,
    /// Cash on site: pay at the event or pay online instead.
    PayAtEvent,
    /// Status unknown: contact the secretariat or try again.
    ContactSupport,
}

impl PaymentAdvice {
    /// Advice lines without the trailing link line.
    #[must_use]
    pub const fn lines(&self) -> &'static [&'static str] {
        match self {
            Self::AwaitBankConfirmation => &[
                "When we receive your bank payment we will confirm your payment.",
                "If you have completed your bank payment and it is still not visible, please contact the conference secretariat.",
            ],
            Self::PayAtEvent => &["Your payment will be confirmed when you pay the fee at the conference."],
            Self::ContactSupport => {
                &["If you have completed your payment please contact the conference secretariat."]
            }
        }
    }

    /// Line that carries the link back to final registration.
    #[must_use]
    pub const fn link_line(&self) -> &'static str {
        match self {
            Self::AwaitBankConfirmation => "You can also still pay online",
            Self::PayAtEvent => "You can still decide to pay online",
            Self::ContactSupport => "Otherwise please try again",
        }
    }
}

/// The readable description of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLabels {
    /// Method label.
    pub method: MethodLabel,
    /// Status label.
    pub status: StatusLabel,
    /// Optional extra advice.
    pub advice: Option<PaymentAdvice>,
}
