//! API route handlers.
//!
//! This module contains all HTTP endpoint implementations for the matching
//! server. Routes are organized by functionality:
//!
//! - `health`: Liveness, readiness, detailed per-algorithm health, and
//!   Prometheus metrics.
//! - `matching`: The unified `POST /match` endpoint.
//! - `admin`: Circuit overrides, stats reset, and A/B test lifecycle.

pub mod admin;
pub mod health;
pub mod matching;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info.
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "supermatch",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v2",
        "endpoints": [
            "/match",
            "/health",
            "/ready",
            "/metrics",
            "/config",
            "/api/v2/health",
            "/api/v2/admin/circuit/{algorithm}/open",
            "/api/v2/admin/circuit/{algorithm}/close",
            "/api/v2/admin/stats/reset",
            "/api/v2/admin/ab-test/start",
            "/api/v2/admin/ab-test/stop"
        ]
    })))
}

/// 404 Not Found handler.
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
