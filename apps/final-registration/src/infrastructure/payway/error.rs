//! PayWay-specific error types.

use thiserror::Error;

use crate::application::ports::CommitError;

/// Errors from the PayWay adapter.
#[derive(Debug, Error, Clone)]
pub enum PayWayError {
    /// Could not build the HTTP client.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("PayWay returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// The response carried no order.
    #[error("PayWay returned no order")]
    EmptyResponse,

    /// PayWay refused to create the order.
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The request could not be expressed on the wire.
    #[error("Invalid order request: {0}")]
    InvalidRequest(String),
}

impl From<PayWayError> for CommitError {
    fn from(err: PayWayError) -> Self {
        match err {
            PayWayError::Rejected(reason) | PayWayError::InvalidRequest(reason) => {
                Self::Rejected { reason }
            }
            PayWayError::Client(message) | PayWayError::Network(message) => {
                Self::Unavailable { message }
            }
            PayWayError::Status { status, body } if status >= 500 => Self::Unavailable {
                message: format!("status {status}: {body}"),
            },
            PayWayError::Status { status, body } => Self::Rejected {
                reason: format!("status {status}: {body}"),
            },
            PayWayError::JsonParse(message) => Self::InvalidResponse { message },
            PayWayError::EmptyResponse => Self::InvalidResponse {
                message: "no order in response".to_string(),
            },
        }
    }
}
