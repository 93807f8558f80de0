//! The per-call signal the monitor aggregates from.
use chrono::{DateTime, Utc};
use domain::AlgorithmId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub algorithm: AlgorithmId,
    pub elapsed_ms: u64,
    pub result_count: usize,
    pub success: bool,
    #[serde(default)]
    pub avg_confidence: Option<f32>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Set when the request was cancelled (caller disconnected, or the
    /// outstanding executor call was abandoned at its timeout boundary)
    /// rather than completing normally with a success or failure outcome.
    #[serde(default)]
    pub cancelled: bool,
}
