//! Observability module for metrics.
//!
//! Prometheus counters and histograms for the eligibility gate, the payment
//! service lookups, wizard routing and registration commits.

mod metrics;

pub use metrics::{
    MetricsConfig, MetricsError, init_metrics, record_commit, record_eligibility_outcome,
    record_gateway_lookup, record_wizard_route,
};
