//! PayWay wire types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Code used when a field is missing or not an integer.
pub const UNKNOWN_CODE: i64 = -1;

/// Body of `POST {base}/orderDetails`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailsRequest {
    /// Order to look up.
    pub orderid: u64,
}

/// Order as returned by `orderDetails`.
///
/// Codes are decoded leniently: numbers and numeric strings are accepted,
/// anything else becomes [`UNKNOWN_CODE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetailsResponse {
    /// Payment state code.
    #[serde(default = "unknown_code", deserialize_with = "lenient_code")]
    pub payed: i64,
    /// Payment method code.
    #[serde(default = "unknown_code", deserialize_with = "lenient_code")]
    pub paymentmethod: i64,
}

/// Body of `POST {base}/createOrder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Participant id.
    pub userid: u64,
    /// Participant name.
    pub name: String,
    /// Amount in cents.
    pub amount: i64,
    /// ISO currency code.
    pub currency: String,
    /// Payment method code.
    pub paymentmethod: i64,
    /// Order description shown on the payment page.
    pub description: String,
}

/// Answer of `createOrder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// Whether the order was created.
    #[serde(default = "default_true")]
    pub success: bool,
    /// Created order id.
    #[serde(default)]
    pub orderid: Option<u64>,
    /// Online payment page.
    #[serde(default)]
    pub paymenturl: Option<String>,
    /// Failure reason.
    #[serde(default)]
    pub error: Option<String>,
}

const fn unknown_code() -> i64 {
    UNKNOWN_CODE
}

const fn default_true() -> bool {
    true
}

fn lenient_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().unwrap_or(UNKNOWN_CODE),
        Value::String(s) => s.trim().parse().unwrap_or(UNKNOWN_CODE),
        _ => UNKNOWN_CODE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_codes() {
        let order: OrderDetailsResponse =
            serde_json::from_str(r#"{"orderid": 5, "payed": 1, "paymentmethod": 2}"#).unwrap();
        assert_eq!(order.payed, 1);
        assert_eq!(order.paymentmethod, 2);
    }

    #[test]
    fn decodes_string_codes() {
        let order: OrderDetailsResponse =
            serde_json::from_str(r#"{"payed": "0", "paymentmethod": " 3 "}"#).unwrap();
        assert_eq!(order.payed, 0);
        assert_eq!(order.paymentmethod, 3);
    }

    #[test]
    fn garbage_codes_become_unknown() {
        let order: OrderDetailsResponse =
            serde_json::from_str(r#"{"payed": "yes", "paymentmethod": null}"#).unwrap();
        assert_eq!(order.payed, UNKNOWN_CODE);
        assert_eq!(order.paymentmethod, UNKNOWN_CODE);

        let order: OrderDetailsResponse = serde_json::from_str(r#"{"payed": 1.5}"#).unwrap();
        assert_eq!(order.payed, UNKNOWN_CODE);
        assert_eq!(order.paymentmethod, UNKNOWN_CODE);
    }

    #[test]
    fn create_order_response_defaults() {
        let response: CreateOrderResponse = serde_json::from_str(r#"{"orderid": 12}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.orderid, Some(12));
        assert!(response.paymenturl.is_none());
    }
}
