use crate::error::ServerResult;
use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::AlgorithmId;
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint (liveness).
/// Returns 200 if the server is running.
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "supermatch",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
    }))
}

/// Readiness check endpoint.
/// Returns 200 if the server is ready to accept requests.
pub async fn readiness_check(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "status": "ready",
        "service": "supermatch",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
        "components": {
            "api": "ready",
            "orchestrator": "ready",
        }
    })))
}

/// Detailed per-algorithm health: circuit state and performance snapshot.
pub async fn detailed_health(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let circuits = state.orchestrator.circuits();
    let monitor = state.orchestrator.monitor();

    let algorithms: Vec<_> = AlgorithmId::ALL
        .iter()
        .map(|&id| {
            let stats = circuits.stats_for(id);
            let snapshot = monitor.snapshot(id);
            json!({
                "algorithm": id.as_str(),
                "circuit_state": stats.state,
                "consecutive_failures": stats.consecutive_failures,
                "total_calls": stats.total_calls,
                "p95_ms": stats.p95_ms,
                "performance": {
                    "success_rate": snapshot.success_rate,
                    "p50_ms": snapshot.p50_ms,
                    "p95_ms": snapshot.p95_ms,
                    "p99_ms": snapshot.p99_ms,
                    "requests_per_minute": snapshot.requests_per_minute,
                }
            })
        })
        .collect();

    Ok(Json(json!({
        "status": "ready",
        "uptime_seconds": state.uptime_seconds(),
        "algorithms": algorithms,
    })))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let body = state
        .metrics_handle
        .as_ref()
        .map(|h| h.render())
        .unwrap_or_default();
    Ok(body)
}

/// Effective configuration, secrets redacted.
pub async fn effective_config(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "bind_addr": state.config.bind_addr,
        "port": state.config.port,
        "timeout_secs": state.config.timeout_secs,
        "max_body_size_mb": state.config.max_body_size_mb,
        "rate_limit_per_minute": state.config.rate_limit_per_minute,
        "enable_cors": state.config.enable_cors,
        "log_level": state.config.log_level,
        "metrics_enabled": state.config.metrics_enabled,
        "core": state.config.core,
        "api_key_count": state.config.api_keys.len(),
    })))
}

/// Server metadata endpoint (authenticated).
pub async fn server_metadata(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let metadata = ServerMetadata {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Ok(Json(serde_json::to_value(metadata)?))
}
