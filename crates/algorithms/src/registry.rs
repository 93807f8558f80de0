//! Built once at startup: a fixed map from [`AlgorithmId`] to its
//! [`Executor`]. A sentinel fills any slot that didn't get a real executor
//! so the circuit breaker and fallback manager always have something to
//! call, never an `Option`.
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use adapter::{AlgorithmConfig, CandidatePayload, NativeResult, OfferPayload};
use domain::AlgorithmId;

use crate::enhanced::EnhancedExecutor;
use crate::error::{ExecutorError, ExecutorResult};
use crate::executor::Executor;
use crate::hybrid::HybridExecutor;
use crate::nexten::NextenExecutor;
use crate::semantic::SemanticExecutor;
use crate::smart::SmartExecutor;

/// Fills any registry slot that has no real executor behind it. Always
/// fails, so the circuit breaker immediately records a failure and the
/// fallback manager moves on rather than the orchestrator panicking on a
/// missing map entry.
pub struct UnavailableExecutor(pub AlgorithmId);

impl Executor for UnavailableExecutor {
    fn execute(
        &self,
        _candidate: &CandidatePayload,
        _offers: &[OfferPayload],
        _config: &AlgorithmConfig,
    ) -> ExecutorResult<Vec<NativeResult>> {
        Err(ExecutorError::Unavailable(self.0.as_str().to_string()))
    }

    fn max_execution_time(&self) -> Duration {
        Duration::from_millis(0)
    }

    fn name(&self) -> AlgorithmId {
        self.0
    }
}

pub struct Registry {
    executors: HashMap<AlgorithmId, Arc<dyn Executor>>,
}

impl Registry {
    /// Build the registry with the five in-tree stub executors.
    pub fn with_defaults() -> Self {
        let mut executors: HashMap<AlgorithmId, Arc<dyn Executor>> = HashMap::new();
        executors.insert(AlgorithmId::Nexten, Arc::new(NextenExecutor));
        executors.insert(AlgorithmId::Smart, Arc::new(SmartExecutor));
        executors.insert(AlgorithmId::Enhanced, Arc::new(EnhancedExecutor));
        executors.insert(AlgorithmId::Semantic, Arc::new(SemanticExecutor));
        executors.insert(AlgorithmId::Hybrid, Arc::new(HybridExecutor));
        Self { executors }
    }

    /// An intentionally-empty registry, useful for tests that only care
    /// about the unavailable-sentinel path.
    pub fn empty() -> Self {
        Self {
            executors: HashMap::new(),
        }
    }

    pub fn get(&self, id: AlgorithmId) -> Arc<dyn Executor> {
        self.executors
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Arc::new(UnavailableExecutor(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_defaults_resolves_all_five_algorithms() {
        let registry = Registry::with_defaults();
        for id in AlgorithmId::ALL {
            assert_eq!(registry.get(id).name(), id);
        }
    }

    #[test]
    fn empty_registry_falls_back_to_sentinel() {
        let registry = Registry::empty();
        let executor = registry.get(AlgorithmId::Nexten);
        let err = executor
            .execute(
                &CandidatePayload::Generic(Default::default()),
                &[],
                &AlgorithmConfig::default(),
            )
            .unwrap_err();
        assert_eq!(err, ExecutorError::Unavailable("nexten".to_string()));
    }
}
