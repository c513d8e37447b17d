//! How a participant chose to pay.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method recorded on an order.
///
/// Wire codes used by the payment service:
/// - `1` = Online payment
/// - `2` = Bank transfer
/// - `3` = Cash on site
///
/// Any other code is [`PaymentMethod::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Paid through the online payment provider.
    OnlinePayment,
    /// Paid by bank transfer.
    BankTransfer,
    /// Paid in cash at the conference.
    CashOnSite,
    /// Unrecognized method code.
    Unknown,
}

impl PaymentMethod {
    /// Decode a wire code. Never fails.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::OnlinePayment,
            2 => Self::BankTransfer,
            3 => Self::CashOnSite,
            _ => Self::Unknown,
        }
    }

    /// Wire code of this method, if it has one.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::OnlinePayment => Some(1),
            Self::BankTransfer => Some(2),
            Self::CashOnSite => Some(3),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnlinePayment => write!(f, "ONLINE_PAYMENT"),
            Self::BankTransfer => write!(f, "BANK_TRANSFER"),
            Self::CashOnSite => write!(f, "CASH_ON_SITE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
