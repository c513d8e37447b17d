//! PayWay Adapter
//!
//! HTTP client for the PayWay order service. Implements the payment gateway
//! (order lookups) and the registration commit (order creation).

mod api_types;
mod client;
mod error;

pub use api_types::{CreateOrderRequest, CreateOrderResponse, OrderDetailsRequest, OrderDetailsResponse};
pub use client::PayWayClient;
pub use error::PayWayError;
