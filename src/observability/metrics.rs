//! Metrics collection and exposition.
//!
//! # Metrics
//! - `routes_requests_total` (counter): API requests by endpoint
//! - `routes_reloads_total` (counter): config reloads by outcome
//! - `routes_table_size` (gauge): entries in the current table

use std::net::SocketAddr;

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

pub fn record_request(endpoint: &'static str) {
    counter!("routes_requests_total", "endpoint" => endpoint).increment(1);
}

pub fn record_reload(outcome: &'static str) {
    counter!("routes_reloads_total", "outcome" => outcome).increment(1);
}

pub fn set_table_size(size: usize) {
    gauge!("routes_table_size").set(size as f64);
}
