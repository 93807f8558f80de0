//! The degradation override: before handing a rule-table decision back to
//! the orchestrator, check whether the chosen algorithm is actually healthy.
use domain::{AlgorithmId, SelectionReason};
use monitor::PerformanceMonitor;
use resilience::CircuitBreakerManager;
use serde::{Deserialize, Serialize};

/// Thresholds the degradation override compares the chosen algorithm's
/// recent stats against. Mirrors [`monitor::DegradationThresholds`] but is
/// owned by the selector so its config can evolve independently (e.g. a
/// `performance_mode` flag that only the selector cares about).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub max_response_time_ms: f64,
    pub min_success_rate: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let defaults = monitor::DegradationThresholds::default();
        Self {
            max_response_time_ms: defaults.max_response_time_ms,
            min_success_rate: defaults.min_success_rate,
        }
    }
}

impl From<SelectorConfig> for monitor::DegradationThresholds {
    fn from(cfg: SelectorConfig) -> Self {
        monitor::DegradationThresholds {
            max_response_time_ms: cfg.max_response_time_ms,
            min_success_rate: cfg.min_success_rate,
        }
    }
}

/// Outcome of a full selection: the algorithm to dispatch to, why, and
/// whether the degradation override had to fall back (possibly all the way
/// back to the original pick, if nothing else in the chain was eligible).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionOutcome {
    pub algorithm: AlgorithmId,
    /// The rule table's original pick, before the degradation override ran.
    /// Equal to `algorithm` unless a substitution happened.
    pub original_algorithm: AlgorithmId,
    pub reason: SelectionReason,
    pub degraded: bool,
}

/// True when `algorithm` is unhealthy enough that the degradation override
/// should look for a substitute: its circuit is OPEN, its recent p95
/// latency exceeds the threshold, or its recent success rate is below the
/// threshold.
fn is_unhealthy(
    algorithm: AlgorithmId,
    circuits: &CircuitBreakerManager,
    monitor: &PerformanceMonitor,
    config: SelectorConfig,
) -> bool {
    if !circuits.is_available(algorithm) {
        return true;
    }
    let snapshot = monitor.snapshot(algorithm);
    snapshot.p95_ms > config.max_response_time_ms || snapshot.success_rate < config.min_success_rate
}

/// Apply the degradation override on top of a rule-table pick. Walks the
/// picked algorithm's static fallback chain (§4.6) looking for the first
/// entry whose circuit allows execution; if the original pick was healthy,
/// it is returned unchanged. If every chain entry is also unhealthy, the
/// original pick is returned with `degraded = true`.
pub fn apply(
    picked: AlgorithmId,
    reason: SelectionReason,
    circuits: &CircuitBreakerManager,
    monitor: &PerformanceMonitor,
    config: SelectorConfig,
) -> SelectionOutcome {
    let circuit_was_open = !circuits.is_available(picked);
    if !is_unhealthy(picked, circuits, monitor, config) {
        return SelectionOutcome {
            algorithm: picked,
            original_algorithm: picked,
            reason,
            degraded: false,
        };
    }

    for candidate in picked.fallback_chain() {
        if circuits.is_available(candidate) {
            let reason = if circuit_was_open {
                SelectionReason::FallbackAfterCircuitOpen
            } else {
                SelectionReason::FallbackAfterDegradation
            };
            tracing::warn!(?picked, chosen = ?candidate, ?reason, "selector degradation override");
            return SelectionOutcome {
                algorithm: candidate,
                original_algorithm: picked,
                reason,
                degraded: false,
            };
        }
    }

    tracing::warn!(?picked, "selector degradation override: no eligible fallback, returning original");
    SelectionOutcome {
        algorithm: picked,
        original_algorithm: picked,
        reason,
        degraded: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resilience::CircuitBreakerConfig;

    fn circuits() -> CircuitBreakerManager {
        CircuitBreakerManager::new(CircuitBreakerConfig {
            failure_threshold: 1,
            ..Default::default()
        })
    }

    #[test]
    fn healthy_pick_passes_through_unchanged() {
        let circuits = circuits();
        let monitor = PerformanceMonitor::default();
        let outcome = apply(
            AlgorithmId::Nexten,
            SelectionReason::CompleteData,
            &circuits,
            &monitor,
            SelectorConfig::default(),
        );
        assert_eq!(outcome.algorithm, AlgorithmId::Nexten);
        assert!(!outcome.degraded);
    }

    #[test]
    fn open_circuit_falls_back_to_first_chain_entry() {
        let circuits = circuits();
        circuits.force_open(AlgorithmId::Nexten, "test");
        let monitor = PerformanceMonitor::default();
        let outcome = apply(
            AlgorithmId::Nexten,
            SelectionReason::CompleteData,
            &circuits,
            &monitor,
            SelectorConfig::default(),
        );
        assert_eq!(outcome.algorithm, AlgorithmId::Enhanced);
        assert_eq!(outcome.reason, SelectionReason::FallbackAfterCircuitOpen);
        assert!(!outcome.degraded);
    }

    #[test]
    fn all_circuits_open_returns_original_as_degraded() {
        let circuits = circuits();
        for id in domain::AlgorithmId::ALL {
            circuits.force_open(id, "test");
        }
        let monitor = PerformanceMonitor::default();
        let outcome = apply(
            AlgorithmId::Nexten,
            SelectionReason::CompleteData,
            &circuits,
            &monitor,
            SelectorConfig::default(),
        );
        assert_eq!(outcome.algorithm, AlgorithmId::Nexten);
        assert!(outcome.degraded);
    }
}
