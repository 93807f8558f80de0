use crate::config::ServerConfig;
use dashmap::DashMap;
use metrics_exporter_prometheus::PrometheusHandle;
use orchestrator::Orchestrator;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: API key -> (count, window_start).
    pub rate_limiter: Arc<DashMap<String, (u32, std::time::Instant)>>,

    /// The matching orchestration core, shared across requests.
    pub orchestrator: Arc<Orchestrator>,

    /// Handle to the installed Prometheus recorder, used to render `/metrics`.
    pub metrics_handle: Option<PrometheusHandle>,

    /// Process start time, for uptime reporting.
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig, metrics_handle: Option<PrometheusHandle>) -> Self {
        let orchestrator = Arc::new(Orchestrator::new(config.core.clone()));

        Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            orchestrator,
            metrics_handle,
            started_at: Instant::now(),
        }
    }

    /// Check if API key is valid.
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Check rate limit for API key.
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Server metadata for health checks.
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
