//! Emits the `metrics` façade calls that back the Prometheus exposition the
//! api crate installs at startup. This module only calls the macros; the
//! recorder/exporter setup lives with the HTTP server.
use domain::AlgorithmId;

use crate::record::PerformanceRecord;

pub fn record(rec: &PerformanceRecord) {
    let algorithm = rec.algorithm.as_str();

    metrics::counter!("matching_requests_total", "algorithm" => algorithm).increment(1);
    if rec.success {
        metrics::counter!("matching_requests_success_total", "algorithm" => algorithm).increment(1);
    } else {
        metrics::counter!("matching_requests_failure_total", "algorithm" => algorithm).increment(1);
    }
    metrics::histogram!("matching_request_duration_ms", "algorithm" => algorithm)
        .record(rec.elapsed_ms as f64);
    metrics::histogram!("matching_result_count", "algorithm" => algorithm)
        .record(rec.result_count as f64);
}

pub fn record_circuit_state(algorithm: AlgorithmId, state: &str) {
    metrics::gauge!("matching_circuit_state", "algorithm" => algorithm.as_str(), "state" => state.to_string())
        .set(1.0);
}
