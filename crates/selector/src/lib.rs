//! Pure `(Context, Config) -> (AlgorithmId, reason)` decision rules, with a
//! degradation override that consults circuit state and recent performance
//! before committing to a pick.
mod degradation;
mod error;
mod rules;

pub use degradation::{SelectionOutcome, SelectorConfig};
pub use error::{SelectorError, SelectorResult};

use domain::{AlgorithmChoice, Context, RequestConfig, SelectionReason};
use monitor::PerformanceMonitor;
use resilience::CircuitBreakerManager;
use std::sync::Arc;

/// The Algorithm Selector component.
///
/// Holds shared handles to the circuit breaker manager and performance
/// monitor so the degradation override can read current health without the
/// caller having to thread them through on every call.
pub struct AlgorithmSelector {
    circuits: Arc<CircuitBreakerManager>,
    monitor: Arc<PerformanceMonitor>,
    config: SelectorConfig,
}

impl AlgorithmSelector {
    pub fn new(
        circuits: Arc<CircuitBreakerManager>,
        monitor: Arc<PerformanceMonitor>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            circuits,
            monitor,
            config,
        }
    }

    /// `select(context, config) -> (AlgorithmId, reason)`. A manual
    /// algorithm override in `request_config` always wins and bypasses the
    /// degradation override entirely.
    pub fn select(&self, context: &Context, request_config: &RequestConfig) -> SelectionOutcome {
        if let AlgorithmChoice::Manual(id) = request_config.algorithm {
            tracing::debug!(algorithm = %id, "manual algorithm override");
            return SelectionOutcome {
                algorithm: id,
                original_algorithm: id,
                reason: SelectionReason::Manual,
                degraded: false,
            };
        }

        let (picked, reason) =
            rules::decide_with_performance_mode(context, request_config.performance_mode);

        degradation::apply(picked, reason, &self.circuits, &self.monitor, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{AlgorithmId, AnalysisType, MobilityPreference, SeniorityLevel};

    fn context() -> Context {
        Context {
            data_completeness: 0.9,
            seniority_level: SeniorityLevel::Senior,
            mobility_type: MobilityPreference::Standard,
            skills_count: 8,
            geo_critical: false,
            complexity_score: 0.2,
            requires_validation: false,
            analysis_type: AnalysisType::Standard,
            candidate_questionnaire_counted: true,
            company_questionnaires_counted: true,
            experience_years: 3.0,
            cv_completeness: 0.5,
            max_commute_km: None,
            relocation_possible: true,
            remote_acceptable: false,
            offer_count: 3,
        }
    }

    #[test]
    fn manual_override_wins_even_when_rules_would_pick_nexten() {
        let selector = AlgorithmSelector::new(
            Arc::new(CircuitBreakerManager::new(Default::default())),
            Arc::new(PerformanceMonitor::default()),
            SelectorConfig::default(),
        );
        let mut config = RequestConfig::default();
        config.algorithm = AlgorithmChoice::Manual(AlgorithmId::Semantic);

        let outcome = selector.select(&context(), &config);
        assert_eq!(outcome.algorithm, AlgorithmId::Semantic);
        assert_eq!(outcome.reason, SelectionReason::Manual);
    }

    #[test]
    fn auto_mode_applies_the_rule_table() {
        let selector = AlgorithmSelector::new(
            Arc::new(CircuitBreakerManager::new(Default::default())),
            Arc::new(PerformanceMonitor::default()),
            SelectorConfig::default(),
        );
        let outcome = selector.select(&context(), &RequestConfig::default());
        assert_eq!(outcome.algorithm, AlgorithmId::Nexten);
        assert_eq!(outcome.reason, SelectionReason::CompleteData);
    }
}
