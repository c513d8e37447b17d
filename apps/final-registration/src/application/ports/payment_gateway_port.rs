//! Payment Gateway Port (Driven Port)
//!
//! Read access to orders held by the payment service.

use async_trait::async_trait;

use crate::domain::payment::Order;
use crate::domain::shared::OrderId;

/// Port for order lookups.
///
/// Adapters never surface errors: any failure to obtain an order (transport,
/// status, malformed body) is reported as `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGatewayPort: Send + Sync {
    /// Look up an order by id.
    async fn get_order(&self, order_id: OrderId) -> Option<Order>;
}
