//! Payment value objects.

mod labels;
mod payed_status;
mod payment_method;

pub use labels::{MethodLabel, PaymentAdvice, PaymentLabels, StatusLabel};
pub use payed_status::PayedStatus;
pub use payment_method::PaymentMethod;
