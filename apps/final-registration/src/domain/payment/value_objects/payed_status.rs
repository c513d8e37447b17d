//! Whether an order has been paid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment state of an order.
///
/// Wire codes used by the payment service:
/// - `0` = Not paid
/// - `1` = Paid
/// - `2` = Refunded through the online provider
/// - `3` = Refunded by bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayedStatus {
    /// Not paid yet.
    NotPayed,
    /// Paid and confirmed.
    Payed,
    /// Refunded through the online provider.
    RefundedOnline,
    /// Refunded by bank transfer.
    RefundedBank,
    /// Unrecognized status code.
    Unknown,
}

impl PayedStatus {
    /// Decode a wire code. Never fails.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::NotPayed,
            1 => Self::Payed,
            2 => Self::RefundedOnline,
            3 => Self::RefundedBank,
            _ => Self::Unknown,
        }
    }

    /// Returns true if the order has been paid.
    #[must_use]
    pub const fn is_payed(&self) -> bool {
        matches!(self, Self::Payed)
    }
}

impl fmt::Display for PayedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPayed => write!(f, "NOT_PAYED"),
            Self::Payed => write!(f, "PAYED"),
            Self::RefundedOnline => write!(f, "REFUNDED_ONLINE"),
            Self::RefundedBank => write!(f, "REFUNDED_BANK"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
