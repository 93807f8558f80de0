//! Per-algorithm rolling aggregates: latency percentiles over the last 100
//! successful calls, all-time success rate, requests-per-minute, and average
//! result count.
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use resilience::Ring;
use serde::{Deserialize, Serialize};

use crate::record::PerformanceRecord;
use crate::rpm::RpmWindow;

const LATENCY_RING_SIZE: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmSnapshot {
    pub total_calls: u64,
    pub success_calls: u64,
    pub success_rate: f64,
    pub p50_ms: f64,
    pub p90_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub requests_per_minute: u64,
    pub avg_result_count: f64,
}

pub struct AlgorithmStats {
    total_calls: AtomicU64,
    success_calls: AtomicU64,
    result_count_sum: AtomicU64,
    recent_success_latencies_ms: Mutex<Ring<u64>>,
    rpm: Mutex<RpmWindow>,
}

impl Default for AlgorithmStats {
    fn default() -> Self {
        Self {
            total_calls: AtomicU64::new(0),
            success_calls: AtomicU64::new(0),
            result_count_sum: AtomicU64::new(0),
            recent_success_latencies_ms: Mutex::new(Ring::new(LATENCY_RING_SIZE)),
            rpm: Mutex::new(RpmWindow::new()),
        }
    }
}

impl AlgorithmStats {
    pub fn record(&self, record: &PerformanceRecord) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        self.result_count_sum
            .fetch_add(record.result_count as u64, Ordering::Relaxed);
        self.rpm.lock().record();

        if record.success {
            self.success_calls.fetch_add(1, Ordering::Relaxed);
            self.recent_success_latencies_ms.lock().push(record.elapsed_ms);
        }
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.total_calls.load(Ordering::Relaxed);
        if total == 0 {
            return 1.0;
        }
        self.success_calls.load(Ordering::Relaxed) as f64 / total as f64
    }

    pub fn p95_ms(&self) -> f64 {
        self.percentile(0.95)
    }

    pub fn percentile(&self, p: f64) -> f64 {
        let mut latencies: Vec<f64> = self
            .recent_success_latencies_ms
            .lock()
            .iter()
            .map(|&ms| ms as f64)
            .collect();
        if latencies.is_empty() {
            return 0.0;
        }
        latencies.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let rank = (p * (latencies.len() as f64 - 1.0)).round() as usize;
        latencies[rank.min(latencies.len() - 1)]
    }

    pub fn snapshot(&self) -> AlgorithmSnapshot {
        let total = self.total_calls.load(Ordering::Relaxed);
        let avg_result_count = if total == 0 {
            0.0
        } else {
            self.result_count_sum.load(Ordering::Relaxed) as f64 / total as f64
        };
        AlgorithmSnapshot {
            total_calls: total,
            success_calls: self.success_calls.load(Ordering::Relaxed),
            success_rate: self.success_rate(),
            p50_ms: self.percentile(0.50),
            p90_ms: self.percentile(0.90),
            p95_ms: self.percentile(0.95),
            p99_ms: self.percentile(0.99),
            requests_per_minute: self.rpm.lock().requests_per_minute(),
            avg_result_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::AlgorithmId;

    fn record(algorithm: AlgorithmId, elapsed_ms: u64, success: bool) -> PerformanceRecord {
        PerformanceRecord {
            algorithm,
            elapsed_ms,
            result_count: 5,
            success,
            avg_confidence: None,
            timestamp: Utc::now(),
            user_id: None,
            cancelled: false,
        }
    }

    #[test]
    fn success_rate_excludes_nothing_and_counts_all_calls() {
        let stats = AlgorithmStats::default();
        stats.record(&record(AlgorithmId::Smart, 10, true));
        stats.record(&record(AlgorithmId::Smart, 10, false));
        assert_eq!(stats.success_rate(), 0.5);
    }

    #[test]
    fn percentiles_only_consider_successful_calls() {
        let stats = AlgorithmStats::default();
        stats.record(&record(AlgorithmId::Smart, 1000, false));
        stats.record(&record(AlgorithmId::Smart, 10, true));
        assert_eq!(stats.p95_ms(), 10.0);
    }

    #[test]
    fn no_calls_yields_perfect_success_rate_and_zero_latency() {
        let stats = AlgorithmStats::default();
        assert_eq!(stats.success_rate(), 1.0);
        assert_eq!(stats.p95_ms(), 0.0);
    }
}
