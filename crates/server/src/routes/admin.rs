//! Administrative endpoints: force a circuit open/closed, reset the
//! performance aggregates, and start/stop an A/B test. None of this is
//! exposed to ordinary callers in production — it is meant for an
//! operator's runbook or an internal dashboard.
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use domain::AlgorithmId;
use monitor::AbTest;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

fn parse_algorithm(raw: &str) -> ServerResult<AlgorithmId> {
    AlgorithmId::parse(raw).ok_or_else(|| ServerError::UnknownAlgorithm(raw.to_string()))
}

/// `POST /api/v2/admin/circuit/{algorithm}/open` — force a circuit breaker
/// open, e.g. ahead of a known-bad deploy of one algorithm's backing model.
pub async fn open_circuit(
    State(state): State<Arc<ServerState>>,
    Path(algorithm): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let algorithm = parse_algorithm(&algorithm)?;
    state.orchestrator.circuits().force_open(algorithm, "admin override");
    Ok(Json(json!({
        "algorithm": algorithm.as_str(),
        "circuit_state": "open",
    })))
}

/// `POST /api/v2/admin/circuit/{algorithm}/close` — force a circuit breaker
/// closed, skipping the usual half-open recovery probation.
pub async fn close_circuit(
    State(state): State<Arc<ServerState>>,
    Path(algorithm): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let algorithm = parse_algorithm(&algorithm)?;
    state.orchestrator.circuits().force_close(algorithm, "admin override");
    Ok(Json(json!({
        "algorithm": algorithm.as_str(),
        "circuit_state": "closed",
    })))
}

/// `POST /api/v2/admin/stats/reset` — clear every per-algorithm and
/// per-A/B-test aggregate. Circuit breaker state is untouched.
pub async fn reset_stats(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    state.orchestrator.monitor().reset_all();
    Ok(Json(json!({ "reset": true })))
}

#[derive(Debug, Deserialize)]
pub struct StartAbTestRequest {
    pub name: String,
    pub arm_a: AlgorithmId,
    pub arm_b: AlgorithmId,
    pub split: f64,
}

/// `POST /api/v2/admin/ab-test/start` — register an A/B test; subsequent
/// requests whose `user_id` hashes into the test are routed to whichever
/// arm `monitor::assign` picks for them.
pub async fn start_ab_test(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<StartAbTestRequest>,
) -> ServerResult<impl IntoResponse> {
    if !(0.0..=1.0).contains(&body.split) {
        return Err(ServerError::BadRequest("split must be in [0, 1]".to_string()));
    }
    state.orchestrator.monitor().register_ab_test(AbTest {
        name: body.name.clone(),
        arm_a: body.arm_a,
        arm_b: body.arm_b,
        split: body.split,
    });
    Ok(Json(json!({ "name": body.name, "started": true })))
}

#[derive(Debug, Deserialize)]
pub struct StopAbTestRequest {
    pub name: String,
}

/// `POST /api/v2/admin/ab-test/stop` — unregister an A/B test. Its
/// accumulated stats remain queryable until the next stats reset.
pub async fn stop_ab_test(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<StopAbTestRequest>,
) -> ServerResult<impl IntoResponse> {
    state.orchestrator.monitor().stop_ab_test(&body.name)?;
    Ok(Json(json!({ "name": body.name, "stopped": true })))
}
