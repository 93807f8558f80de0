use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use domain::MatchRequest;
use std::sync::Arc;

/// Run a candidate/offer set through the matching orchestration core.
///
/// Always returns HTTP 200 for a structurally valid request — degraded or
/// failed matching is reported via the response body's `status`/`warning`
/// fields, not the HTTP status line.
pub async fn match_candidates(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<MatchRequest>,
) -> ServerResult<impl IntoResponse> {
    let request_id = uuid::Uuid::new_v4().to_string();
    let response = state.orchestrator.clone().process_async(request_id, request).await?;
    Ok(Json(response))
}
