//! Registry of one [`CircuitBreaker`] per algorithm.
use dashmap::DashMap;
use domain::AlgorithmId;
use std::sync::Arc;

use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitStats};

/// Owns one breaker per algorithm and hands out shared handles to it.
/// Breakers are created lazily with `config` on first access so callers
/// never need to pre-register every algorithm up front.
pub struct CircuitBreakerManager {
    config: CircuitBreakerConfig,
    breakers: DashMap<AlgorithmId, Arc<CircuitBreaker>>,
}

impl CircuitBreakerManager {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            breakers: DashMap::new(),
        }
    }

    pub fn get(&self, algorithm: AlgorithmId) -> Arc<CircuitBreaker> {
        self.breakers
            .entry(algorithm)
            .or_insert_with(|| Arc::new(CircuitBreaker::new(self.config)))
            .clone()
    }

    pub fn is_available(&self, algorithm: AlgorithmId) -> bool {
        use crate::circuit_breaker::CircuitState;
        !matches!(self.get(algorithm).current_state(), CircuitState::Open)
    }

    pub fn stats_for(&self, algorithm: AlgorithmId) -> CircuitStats {
        self.get(algorithm).stats()
    }

    pub fn stats_all(&self) -> Vec<(AlgorithmId, CircuitStats)> {
        AlgorithmId::ALL
            .iter()
            .map(|&id| (id, self.stats_for(id)))
            .collect()
    }

    pub fn force_open(&self, algorithm: AlgorithmId, reason: &str) {
        self.get(algorithm).force_open(reason);
    }

    pub fn force_close(&self, algorithm: AlgorithmId, reason: &str) {
        self.get(algorithm).force_close(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CircuitError;

    #[test]
    fn each_algorithm_gets_its_own_independent_breaker() {
        let manager = CircuitBreakerManager::new(CircuitBreakerConfig {
            failure_threshold: 1,
            ..Default::default()
        });

        let _: Result<i32, CircuitError<String>> =
            manager.get(AlgorithmId::Nexten).call(|| Err("boom".into()));
        assert!(!manager.is_available(AlgorithmId::Nexten));
        assert!(manager.is_available(AlgorithmId::Smart));
    }
}
