//! Order as reported by the payment service.

use serde::{Deserialize, Serialize};

use super::{PayedStatus, PaymentMethod};
use crate::domain::shared::OrderId;

/// A payment order. Read-only in this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub order_id: OrderId,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Payment state.
    pub payed_status: PayedStatus,
}

impl Order {
    /// Build an order from raw wire codes.
    #[must_use]
    pub const fn from_codes(order_id: OrderId, payed: i64, payment_method: i64) -> Self {
        Self {
            order_id,
            payment_method: PaymentMethod::from_code(payment_method),
            payed_status: PayedStatus::from_code(payed),
        }
    }

    /// Returns true if the order is paid.
    #[must_use]
    pub const fn is_payed(&self) -> bool {
        self.payed_status.is_payed()
    }

    /// Returns true if the participant still has to complete a bank transfer.
    #[must_use]
    pub const fn awaits_bank_transfer(&self) -> bool {
        !self.is_payed() && matches!(self.payment_method, PaymentMethod::BankTransfer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(payed: i64, method: i64) -> Order {
        Order::from_codes(OrderId::from_raw(1).unwrap(), payed, method)
    }

    #[test]
    fn from_codes_decodes_both_fields() {
        let o = order(1, 3);
        assert_eq!(o.payed_status, PayedStatus::Payed);
        assert_eq!(o.payment_method, PaymentMethod::CashOnSite);
    }

    #[test]
    fn bank_transfer_awaiting() {
        assert!(order(0, 2).awaits_bank_transfer());
        assert!(!order(1, 2).awaits_bank_transfer());
        assert!(!order(0, 1).awaits_bank_transfer());
        assert!(order(99, 2).awaits_bank_transfer());
    }
}
