//! Prometheus metrics for intake volume and store latency.
//!
//! This module provides metrics for:
//! - Accepted contact messages and appointment requests
//! - Rejected submissions by kind
//! - Document store latency and failures by operation

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Store operation latency metric name.
pub const METRIC_STORE_LATENCY: &str = "store_latency_ms";
/// Accepted contact messages counter metric name.
pub const METRIC_CONTACT_SUBMISSIONS: &str = "contact_submissions_total";
/// Accepted appointment requests counter metric name.
pub const METRIC_APPOINTMENT_REQUESTS: &str = "appointment_requests_total";
/// Rejected submissions counter metric name.
pub const METRIC_SUBMISSIONS_REJECTED: &str = "submissions_rejected_total";
/// Store errors counter metric name.
pub const METRIC_STORE_ERRORS: &str = "store_errors_total";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the handle renders the scrape output.
pub fn init_metrics() -> Result<PrometheusHandle, String> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| e.to_string())?;

    describe_histogram!(
        METRIC_STORE_LATENCY,
        "Document store operation latency in milliseconds"
    );

    describe_counter!(
        METRIC_CONTACT_SUBMISSIONS,
        "Total number of contact messages stored"
    );
    describe_counter!(
        METRIC_APPOINTMENT_REQUESTS,
        "Total number of appointment requests stored"
    );
    describe_counter!(
        METRIC_SUBMISSIONS_REJECTED,
        "Total number of submissions rejected by validation"
    );
    describe_counter!(
        METRIC_STORE_ERRORS,
        "Total number of failed document store operations"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Record document store operation latency.
pub fn record_store_latency(start: Instant, op: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_STORE_LATENCY, "op" => op).record(latency_ms);
}

/// Increment accepted contact messages counter.
pub fn inc_contact_submissions() {
    counter!(METRIC_CONTACT_SUBMISSIONS).increment(1);
}

/// Increment accepted appointment requests counter.
pub fn inc_appointment_requests() {
    counter!(METRIC_APPOINTMENT_REQUESTS).increment(1);
}

/// Increment rejected submissions counter.
pub fn inc_submissions_rejected(kind: &'static str) {
    counter!(METRIC_SUBMISSIONS_REJECTED, "kind" => kind).increment(1);
}

/// Increment store errors counter.
pub fn inc_store_errors(op: &'static str) {
    counter!(METRIC_STORE_ERRORS, "op" => op).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_without_recorder_is_a_no_op() {
        record_store_latency(Instant::now(), "insert");
        inc_contact_submissions();
        inc_submissions_rejected("contact");
        inc_store_errors("find");
    }
}
