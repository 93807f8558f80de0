//! Bounds how many blocking executor calls run at once, globally and per
//! algorithm, so a burst of requests can't starve the async runtime's
//! worker threads or let one algorithm monopolize the shared pool.
use std::sync::Arc;

use dashmap::DashMap;
use domain::AlgorithmId;
use serde::{Deserialize, Serialize};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcurrencyConfig {
    /// Upper bound on blocking executor calls running at once, across every
    /// algorithm. Mirrors the size of the `spawn_blocking` pool this
    /// orchestrator is willing to occupy.
    pub max_workers: usize,
    /// Upper bound on blocking executor calls running at once for a single
    /// algorithm.
    pub max_parallel_requests: usize,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            max_workers: 4,
            max_parallel_requests: 10,
        }
    }
}

/// One global semaphore plus a lazily-created semaphore per algorithm,
/// mirroring [`resilience::CircuitBreakerManager`]'s per-algorithm registry.
pub struct ConcurrencyLimiter {
    config: ConcurrencyConfig,
    global: Arc<Semaphore>,
    per_algorithm: DashMap<AlgorithmId, Arc<Semaphore>>,
}

/// Held for the lifetime of one executor call. Dropping it (normally, or
/// because the call was abandoned) releases both permits.
pub struct ConcurrencyPermit {
    _global: OwnedSemaphorePermit,
    _algorithm: OwnedSemaphorePermit,
}

impl ConcurrencyLimiter {
    pub fn new(config: ConcurrencyConfig) -> Self {
        Self {
            config,
            global: Arc::new(Semaphore::new(config.max_workers.max(1))),
            per_algorithm: DashMap::new(),
        }
    }

    fn algorithm_semaphore(&self, algorithm: AlgorithmId) -> Arc<Semaphore> {
        self.per_algorithm
            .entry(algorithm)
            .or_insert_with(|| Arc::new(Semaphore::new(self.config.max_parallel_requests.max(1))))
            .clone()
    }

    /// Wait for a free slot in both the global pool and `algorithm`'s own
    /// pool. Never fails: neither semaphore is ever closed.
    pub async fn acquire(&self, algorithm: AlgorithmId) -> ConcurrencyPermit {
        let algorithm_sem = self.algorithm_semaphore(algorithm);
        let global = self
            .global
            .clone()
            .acquire_owned()
            .await
            .expect("global concurrency semaphore is never closed");
        let algorithm = algorithm_sem
            .acquire_owned()
            .await
            .expect("per-algorithm concurrency semaphore is never closed");
        ConcurrencyPermit {
            _global: global,
            _algorithm: algorithm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn a_second_acquire_for_the_same_algorithm_waits_for_the_first_to_drop() {
        let limiter = ConcurrencyLimiter::new(ConcurrencyConfig {
            max_workers: 4,
            max_parallel_requests: 1,
        });

        let first = limiter.acquire(AlgorithmId::Nexten).await;
        let second = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            limiter.acquire(AlgorithmId::Nexten),
        )
        .await;
        assert!(second.is_err(), "second acquire should still be waiting on the first permit");

        drop(first);
        let third = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            limiter.acquire(AlgorithmId::Nexten),
        )
        .await;
        assert!(third.is_ok(), "acquire should succeed once the held permit is dropped");
    }

    #[tokio::test]
    async fn different_algorithms_do_not_contend_with_each_other() {
        let limiter = ConcurrencyLimiter::new(ConcurrencyConfig {
            max_workers: 4,
            max_parallel_requests: 1,
        });

        let _held = limiter.acquire(AlgorithmId::Nexten).await;
        let other = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            limiter.acquire(AlgorithmId::Smart),
        )
        .await;
        assert!(other.is_ok(), "a different algorithm's semaphore must not be blocked");
    }

    #[tokio::test]
    async fn the_global_cap_gates_across_algorithms() {
        let limiter = ConcurrencyLimiter::new(ConcurrencyConfig {
            max_workers: 1,
            max_parallel_requests: 10,
        });

        let _held = limiter.acquire(AlgorithmId::Nexten).await;
        let other = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            limiter.acquire(AlgorithmId::Smart),
        )
        .await;
        assert!(other.is_err(), "the global semaphore must gate a different algorithm too");
    }
}
