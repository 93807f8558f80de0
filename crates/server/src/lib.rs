//! HTTP REST API for the matching orchestration core.
//!
//! This crate exposes the `orchestrator` crate's `Orchestrator::process`
//! over a production-ready Axum server. It supports:
//!
//! - **Matching**: `POST /match` runs a candidate/offer set through context
//!   analysis, algorithm selection, adaptation, circuit-breaker-gated
//!   execution, fallback, and performance monitoring.
//! - **Health & Metrics**: Liveness/readiness probes, a detailed per-algorithm
//!   health view, and Prometheus-compatible metrics.
//! - **Admin**: Forcing circuit state, resetting stats, and A/B test
//!   lifecycle management.
//!
//! # Features
//!
//! - **Authentication**: API key-based authentication with rate limiting.
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging.
//! - **Configuration**: Environment variable and file-based configuration.
//! - **Error Handling**: Comprehensive error responses with error codes.
//! - **Graceful Shutdown**: Proper signal handling for production deployments.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `POST /match` - Run the matching pipeline
//! - `GET /api/v2/health` - Per-algorithm circuit + performance detail
//! - `GET /config` - Effective configuration, secrets redacted
//! - `POST /api/v2/admin/circuit/{algorithm}/open` - Force a circuit open
//! - `POST /api/v2/admin/circuit/{algorithm}/close` - Force a circuit closed
//! - `POST /api/v2/admin/stats/reset` - Clear per-algorithm and per-test stats
//! - `POST /api/v2/admin/ab-test/start` - Register an A/B test
//! - `POST /api/v2/admin/ab-test/stop` - Unregister an A/B test

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::start_server;
pub use state::ServerState;
