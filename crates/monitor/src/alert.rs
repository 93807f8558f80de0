//! Advisory alerting thresholds on top of [`crate::stats::AlgorithmStats`].
//! Alerts are logged, never fatal, and rate-limited to one per
//! (algorithm, metric) pair every `cooldown`.
use std::time::{Duration, Instant};

use dashmap::DashMap;
use domain::AlgorithmId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    pub error_rate_warning: f64,
    pub error_rate_critical: f64,
    pub p95_warning_ms: f64,
    pub p95_critical_ms: f64,
    pub success_rate_critical: f64,
    pub cooldown: Duration,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            error_rate_warning: 0.02,
            error_rate_critical: 0.05,
            p95_warning_ms: 120.0,
            p95_critical_ms: 175.0,
            success_rate_critical: 0.90,
            cooldown: Duration::from_secs(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    ErrorRate,
    P95Latency,
    SuccessRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

pub struct AlertManager {
    thresholds: AlertThresholds,
    last_fired: DashMap<(AlgorithmId, Metric), Instant>,
}

impl AlertManager {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self {
            thresholds,
            last_fired: DashMap::new(),
        }
    }

    /// Evaluate `p95_ms` and `success_rate` for `algorithm`, logging at most
    /// one alert per metric per cooldown window.
    pub fn evaluate(&self, algorithm: AlgorithmId, p95_ms: f64, success_rate: f64) {
        let error_rate = 1.0 - success_rate;

        if error_rate >= self.thresholds.error_rate_critical {
            self.fire(algorithm, Metric::ErrorRate, Severity::Critical, error_rate);
        } else if error_rate >= self.thresholds.error_rate_warning {
            self.fire(algorithm, Metric::ErrorRate, Severity::Warning, error_rate);
        }

        if p95_ms >= self.thresholds.p95_critical_ms {
            self.fire(algorithm, Metric::P95Latency, Severity::Critical, p95_ms);
        } else if p95_ms >= self.thresholds.p95_warning_ms {
            self.fire(algorithm, Metric::P95Latency, Severity::Warning, p95_ms);
        }

        if success_rate < self.thresholds.success_rate_critical {
            self.fire(algorithm, Metric::SuccessRate, Severity::Critical, success_rate);
        }
    }

    fn fire(&self, algorithm: AlgorithmId, metric: Metric, severity: Severity, value: f64) {
        let key = (algorithm, metric);
        let now = Instant::now();
        if let Some(last) = self.last_fired.get(&key) {
            if now.duration_since(*last) < self.thresholds.cooldown {
                return;
            }
        }
        self.last_fired.insert(key, now);

        match severity {
            Severity::Warning => {
                tracing::warn!(?algorithm, ?metric, value, "performance alert")
            }
            Severity::Critical => {
                tracing::error!(?algorithm, ?metric, value, "performance alert")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_suppresses_repeated_alerts() {
        let manager = AlertManager::new(AlertThresholds {
            cooldown: Duration::from_secs(300),
            ..Default::default()
        });
        manager.evaluate(AlgorithmId::Smart, 200.0, 0.99);
        let key = (AlgorithmId::Smart, Metric::P95Latency);
        let first = *manager.last_fired.get(&key).unwrap();
        manager.evaluate(AlgorithmId::Smart, 200.0, 0.99);
        let second = *manager.last_fired.get(&key).unwrap();
        assert_eq!(first, second);
    }
}
