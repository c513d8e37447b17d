//! Payment domain services.

mod status_table;

pub use status_table::PaymentStatusTable;
