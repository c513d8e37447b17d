//! Prometheus metrics for the final registration service.
//!
//! # Example
//!
//! ```ignore
//! use final_registration::observability::{init_metrics, MetricsConfig};
//!
//! init_metrics(&MetricsConfig::default())?;
//! record_gateway_lookup("resolved", 0.042);
//! ```

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{Ipv4Addr, SocketAddr};

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
    /// Histogram buckets for latency measurements (in seconds).
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 9090)),
            // Payment service round trips, 5ms to 10s
            latency_buckets: vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            listen_addr: addr,
            ..Default::default()
        }
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
///
/// # Errors
///
/// Returns an error if the metrics exporter fails to start (e.g., port already in use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .set_buckets(&config.latency_buckets)
        .map_err(|e| MetricsError::Configuration(e.to_string()))?
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Record the outcome of an eligibility check.
///
/// # Arguments
///
/// * `outcome` - `"allowed"`, `"allowed_with_banner"` or a block reason (e.g. `"registration_closed"`)
pub fn record_eligibility_outcome(outcome: &str) {
    counter!(
        "final_registration_eligibility_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

/// Record an order lookup against the payment service.
///
/// # Arguments
///
/// * `result` - `"resolved"` or `"unavailable"`
/// * `latency_seconds` - Round trip time in seconds
pub fn record_gateway_lookup(result: &str, latency_seconds: f64) {
    counter!(
        "final_registration_gateway_lookups_total",
        "result" => result.to_string()
    )
    .increment(1);

    histogram!("final_registration_gateway_latency_seconds").record(latency_seconds);
}

/// Record a routed wizard request.
pub fn record_wizard_route(stage: &str, route: &str) {
    counter!(
        "final_registration_wizard_routes_total",
        "stage" => stage.to_string(),
        "route" => route.to_string()
    )
    .increment(1);
}

/// Record a registration commit.
///
/// # Arguments
///
/// * `result` - `"success"`, `"rejected"` or `"unavailable"`
pub fn record_commit(result: &str) {
    counter!(
        "final_registration_commits_total",
        "result" => result.to_string()
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Without an installed recorder these are no-ops; they must not panic.

    #[test]
    fn test_record_eligibility_outcome() {
        record_eligibility_outcome("allowed");
        record_eligibility_outcome("gateway_unavailable");
    }

    #[test]
    fn test_record_gateway_lookup() {
        record_gateway_lookup("resolved", 0.015);
    }

    #[test]
    fn test_record_wizard_route() {
        record_wizard_route("MAIN", "advance");
    }

    #[test]
    fn test_record_commit() {
        record_commit("success");
    }

    #[test]
    fn test_default_config() {
        let config = MetricsConfig::default();
        assert_eq!(config.listen_addr.port(), 9090);
        assert!(!config.latency_buckets.is_empty());
    }
}
