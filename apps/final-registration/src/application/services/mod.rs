//! Application services shared by several use cases.

mod payment_status_resolver;

pub use payment_status_resolver::{PaymentResolution, PaymentStatusResolver};
