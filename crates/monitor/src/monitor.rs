//! Ties together per-algorithm stats, alerting, and A/B testing behind one
//! handle shared across the orchestrator.
use dashmap::DashMap;
use domain::AlgorithmId;

use crate::ab::{assign, AbSignificanceSummary, AbStatsRegistry, AbTest};
use crate::alert::{AlertManager, AlertThresholds};
use crate::error::{MonitorError, MonitorResult};
use crate::record::PerformanceRecord;
use crate::stats::{AlgorithmSnapshot, AlgorithmStats};

/// Thresholds the selector's degradation override compares against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationThresholds {
    pub max_response_time_ms: f64,
    pub min_success_rate: f64,
}

impl Default for DegradationThresholds {
    fn default() -> Self {
        Self {
            max_response_time_ms: 150.0,
            min_success_rate: 0.85,
        }
    }
}

pub struct PerformanceMonitor {
    stats: DashMap<AlgorithmId, AlgorithmStats>,
    alerts: AlertManager,
    ab_tests: DashMap<String, AbTest>,
    ab_stats: AbStatsRegistry,
}

impl PerformanceMonitor {
    pub fn new(alert_thresholds: AlertThresholds) -> Self {
        Self {
            stats: DashMap::new(),
            alerts: AlertManager::new(alert_thresholds),
            ab_tests: DashMap::new(),
            ab_stats: AbStatsRegistry::default(),
        }
    }

    /// Record one call outcome, update aggregates, run the alert check, and
    /// fan out to any A/B test this call's user is enrolled in.
    pub fn record(&self, record: PerformanceRecord) {
        self.stats
            .entry(record.algorithm)
            .or_default()
            .record(&record);

        crate::prometheus::record(&record);

        let snapshot = self.snapshot(record.algorithm);
        self.alerts
            .evaluate(record.algorithm, snapshot.p95_ms, snapshot.success_rate);

        if let Some(user_id) = &record.user_id {
            for entry in self.ab_tests.iter() {
                let test = entry.value();
                if assign(test, user_id) == record.algorithm {
                    self.ab_stats.record(&test.name, record.algorithm, &record);
                }
            }
        }
    }

    pub fn snapshot(&self, algorithm: AlgorithmId) -> AlgorithmSnapshot {
        self.stats.entry(algorithm).or_default().snapshot()
    }

    pub fn snapshot_all(&self) -> Vec<(AlgorithmId, AlgorithmSnapshot)> {
        AlgorithmId::ALL
            .iter()
            .map(|&id| (id, self.snapshot(id)))
            .collect()
    }

    pub fn p95_ms(&self, algorithm: AlgorithmId) -> f64 {
        self.snapshot(algorithm).p95_ms
    }

    pub fn success_rate(&self, algorithm: AlgorithmId) -> f64 {
        self.snapshot(algorithm).success_rate
    }

    /// True when `algorithm`'s recent p95 latency or success rate breach
    /// `thresholds`, the signal the selector's degradation override reacts
    /// to (circuit-open is checked separately via the resilience crate).
    pub fn is_degraded(&self, algorithm: AlgorithmId, thresholds: DegradationThresholds) -> bool {
        let snapshot = self.snapshot(algorithm);
        snapshot.p95_ms > thresholds.max_response_time_ms
            || snapshot.success_rate < thresholds.min_success_rate
    }

    pub fn register_ab_test(&self, test: AbTest) {
        self.ab_tests.insert(test.name.clone(), test);
    }

    pub fn assign_ab(&self, test_name: &str, user_id: &str) -> MonitorResult<AlgorithmId> {
        let test = self
            .ab_tests
            .get(test_name)
            .ok_or_else(|| MonitorError::UnknownTest(test_name.to_string()))?;
        Ok(assign(&test, user_id))
    }

    pub fn ab_summary(&self, test_name: &str) -> MonitorResult<AbSignificanceSummary> {
        let test = self
            .ab_tests
            .get(test_name)
            .ok_or_else(|| MonitorError::UnknownTest(test_name.to_string()))?;
        Ok(self.ab_stats.summary(&test))
    }

    pub fn stop_ab_test(&self, test_name: &str) -> MonitorResult<()> {
        self.ab_tests
            .remove(test_name)
            .map(|_| ())
            .ok_or_else(|| MonitorError::UnknownTest(test_name.to_string()))
    }

    /// Clear every per-algorithm and per-test aggregate. Circuit breaker
    /// state is untouched; see `CircuitBreakerManager::force_close`.
    pub fn reset_all(&self) {
        self.stats.clear();
        self.ab_stats.clear();
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(AlertThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(algorithm: AlgorithmId, success: bool, user_id: Option<&str>) -> PerformanceRecord {
        PerformanceRecord {
            algorithm,
            elapsed_ms: 20,
            result_count: 3,
            success,
            avg_confidence: None,
            timestamp: Utc::now(),
            user_id: user_id.map(String::from),
            cancelled: false,
        }
    }

    #[test]
    fn degradation_triggers_on_low_success_rate() {
        let monitor = PerformanceMonitor::default();
        for _ in 0..10 {
            monitor.record(record(AlgorithmId::Smart, false, None));
        }
        assert!(monitor.is_degraded(AlgorithmId::Smart, DegradationThresholds::default()));
    }

    #[test]
    fn unregistered_ab_test_errors() {
        let monitor = PerformanceMonitor::default();
        assert!(monitor.assign_ab("missing", "u1").is_err());
    }

    #[test]
    fn registered_ab_test_assigns_deterministically() {
        let monitor = PerformanceMonitor::default();
        monitor.register_ab_test(AbTest {
            name: "t1".into(),
            arm_a: AlgorithmId::Nexten,
            arm_b: AlgorithmId::Smart,
            split: 1.0,
        });
        assert_eq!(monitor.assign_ab("t1", "u1").unwrap(), AlgorithmId::Nexten);
    }
}
