//! Payment Status Table
//!
//! Total mapping from `(method, status)` to readable labels. Every pair of
//! enum values has exactly one row, so resolution can never fail.

use crate::domain::payment::value_objects::{
    MethodLabel, PayedStatus, PaymentAdvice, PaymentLabels, PaymentMethod, StatusLabel,
};

/// Stateless lookup of payment labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentStatusTable;

impl PaymentStatusTable {
    /// Describe an order's method and status.
    #[must_use]
    pub const fn describe(method: PaymentMethod, status: PayedStatus) -> PaymentLabels {
        match status {
            PayedStatus::NotPayed => {
                let advice = match method {
                    PaymentMethod::BankTransfer => Some(PaymentAdvice::AwaitBankConfirmation),
                    PaymentMethod::CashOnSite => Some(PaymentAdvice::PayAtEvent),
                    PaymentMethod::OnlinePayment | PaymentMethod::Unknown => None,
                };
                PaymentLabels {
                    method: Self::method_label(method),
                    status: StatusLabel::NotYetConfirmed,
                    advice,
                }
            }
            PayedStatus::Payed => PaymentLabels {
                method: Self::method_label(method),
                status: StatusLabel::Confirmed,
                advice: None,
            },
            PayedStatus::RefundedOnline | PayedStatus::RefundedBank => PaymentLabels {
                method: Self::method_label(method),
                status: StatusLabel::Refunded,
                advice: None,
            },
            PayedStatus::Unknown => PaymentLabels {
                method: MethodLabel::Unknown,
                status: StatusLabel::Unknown,
                advice: Some(PaymentAdvice::ContactSupport),
            },
        }
    }

    const fn method_label(method: PaymentMethod) -> MethodLabel {
        match method {
            PaymentMethod::OnlinePayment => MethodLabel::OnlinePayment,
            PaymentMethod::BankTransfer => MethodLabel::BankTransfer,
            PaymentMethod::CashOnSite => MethodLabel::OnSite,
            PaymentMethod::Unknown => MethodLabel::Unknown,
        }
    }
}
