//! PayWay HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api_types::{CreateOrderRequest, CreateOrderResponse, OrderDetailsRequest, OrderDetailsResponse};
use super::error::PayWayError;
use crate::application::ports::{
    CommitError, CommitReceipt, CommitRequest, PaymentGatewayPort, RegistrationCommitPort,
};
use crate::config::PayWayConfig;
use crate::domain::payment::Order;
use crate::domain::shared::OrderId;

/// HTTP client for the PayWay order API. No retries: failures surface at once.
#[derive(Debug, Clone)]
pub struct PayWayClient {
    client: Client,
    base_url: String,
}

impl PayWayClient {
    /// Create a new client from config.
    pub fn new(config: &PayWayConfig) -> Result<Self, PayWayError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PayWayError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw order details.
    pub async fn order_details(&self, order_id: OrderId) -> Result<OrderDetailsResponse, PayWayError> {
        let body = OrderDetailsRequest {
            orderid: order_id.value(),
        };
        let value: Value = self.post("orderDetails", &body).await?;

        // An empty answer means the order could not be retrieved.
        match &value {
            Value::Object(map) if !map.is_empty() => {}
            _ => return Err(PayWayError::EmptyResponse),
        }
        serde_json::from_value(value).map_err(|e| PayWayError::JsonParse(e.to_string()))
    }

    /// Create an order.
    pub async fn create_order(&self, request: &CommitRequest) -> Result<CommitReceipt, PayWayError> {
        let body = CreateOrderRequest {
            userid: request.participant_id.value(),
            name: request.participant_name.clone(),
            amount: to_cents(request.summary.total.amount())?,
            currency: "EUR".to_string(),
            paymentmethod: request.payment_method.code().ok_or_else(|| {
                PayWayError::InvalidRequest("payment method has no wire code".to_string())
            })?,
            description: request.summary.fee.description.clone(),
        };

        let response: CreateOrderResponse = self.post("createOrder", &body).await?;
        if !response.success {
            return Err(PayWayError::Rejected(
                response.error.unwrap_or_else(|| "unspecified".to_string()),
            ));
        }

        let order_id = response
            .orderid
            .and_then(OrderId::from_raw)
            .ok_or(PayWayError::EmptyResponse)?;

        Ok(CommitReceipt {
            order_id,
            payment_url: response.paymenturl,
        })
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, PayWayError> {
        let url = format!("{}/{path}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| PayWayError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PayWayError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(PayWayError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            return serde_json::from_str("null").map_err(|e| PayWayError::JsonParse(e.to_string()));
        }
        serde_json::from_str(&text).map_err(|e| PayWayError::JsonParse(e.to_string()))
    }
}

fn to_cents(amount: Decimal) -> Result<i64, PayWayError> {
    (amount * Decimal::ONE_HUNDRED)
        .round()
        .to_i64()
        .ok_or_else(|| PayWayError::InvalidRequest(format!("amount {amount} out of range")))
}

#[async_trait]
impl PaymentGatewayPort for PayWayClient {
    async fn get_order(&self, order_id: OrderId) -> Option<Order> {
        match self.order_details(order_id).await {
            Ok(details) => Some(Order::from_codes(order_id, details.payed, details.paymentmethod)),
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "PayWay order lookup failed");
                None
            }
        }
    }
}

#[async_trait]
impl RegistrationCommitPort for PayWayClient {
    async fn commit(&self, request: &CommitRequest) -> Result<CommitReceipt, CommitError> {
        self.create_order(request).await.map_err(|e| {
            tracing::warn!(participant_id = %request.participant_id, error = %e, "PayWay order creation failed");
            CommitError::from(e)
        })
    }
}
