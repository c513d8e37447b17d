//! Payment Status Resolver
//!
//! Turns a participant's order id into readable payment labels, asking the
//! payment service at most once.

use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::PaymentGatewayPort;
use crate::domain::payment::{Order, PaymentLabels, PaymentStatusTable};
use crate::domain::shared::OrderId;
use crate::observability::record_gateway_lookup;

/// Result of resolving an order id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentResolution {
    /// The participant has no order yet.
    NoOrder,
    /// The payment service returned nothing.
    GatewayUnavailable {
        /// The order that was looked up.
        order_id: OrderId,
    },
    /// The order was found.
    Resolved {
        /// The order.
        order: Order,
        /// Readable labels.
        labels: PaymentLabels,
    },
}

/// Resolves payment status through the payment gateway port.
pub struct PaymentStatusResolver<G>
where
    G: PaymentGatewayPort,
{
    gateway: Arc<G>,
}

impl<G> PaymentStatusResolver<G>
where
    G: PaymentGatewayPort,
{
    /// Create a new resolver.
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Resolve an optional order id. Never fails.
    pub async fn resolve(&self, order_id: Option<OrderId>) -> PaymentResolution {
        let Some(order_id) = order_id else {
            return PaymentResolution::NoOrder;
        };

        let started = Instant::now();
        let order = self.gateway.get_order(order_id).await;
        let elapsed = started.elapsed().as_secs_f64();

        match order {
            Some(order) => {
                let labels = PaymentStatusTable::describe(order.payment_method, order.payed_status);
                record_gateway_lookup("resolved", elapsed);
                tracing::debug!(
                    order_id = %order_id,
                    payment_method = %order.payment_method,
                    payed_status = %order.payed_status,
                    "Resolved payment status"
                );
                PaymentResolution::Resolved { order, labels }
            }
            None => {
                record_gateway_lookup("unavailable", elapsed);
                tracing::warn!(order_id = %order_id, "Payment service returned no order");
                PaymentResolution::GatewayUnavailable { order_id }
            }
        }
    }
}
