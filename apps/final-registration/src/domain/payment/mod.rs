//! Payment Bounded Context
//!
//! Orders are owned by the external payment service and only ever read here.
//! This context turns the raw order codes into readable labels.

pub mod services;
pub mod value_objects;

mod order;

pub use order::Order;
pub use services::PaymentStatusTable;
pub use value_objects::{MethodLabel, PayedStatus, PaymentAdvice, PaymentLabels, PaymentMethod, StatusLabel};
