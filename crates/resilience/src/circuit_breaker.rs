//! Per-algorithm circuit breaker state machine.
//!
//! Generalizes a single-provider breaker into a richer machine: a HALF-OPEN
//! state that needs `success_threshold` consecutive successes (not just one)
//! before closing, a bounded ring of recent call latencies for
//! p50/p90/p95/p99, slow-call flagging, and a bounded ring of recent state
//! transitions for diagnostics.
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::CircuitError;
use crate::ring::Ring;

/// Tunables for one circuit breaker instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: u32,
    pub recovery_timeout: Duration,
    pub success_threshold: u32,
    pub call_timeout: Duration,
    pub slow_call_threshold: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            recovery_timeout: Duration::from_secs(30),
            success_threshold: 3,
            call_timeout: Duration::from_millis(80),
            slow_call_threshold: Duration::from_millis(50),
        }
    }
}

/// Current state of the circuit breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

/// A single recorded state transition, kept for diagnostics only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTransition {
    pub from: CircuitState,
    pub to: CircuitState,
    pub reason: String,
    #[serde(skip)]
    pub at: Option<Instant>,
}

/// Point-in-time snapshot of a breaker's counters and latency histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitStats {
    pub state: CircuitState,
    pub consecutive_failures: u64,
    pub consecutive_successes: u64,
    pub total_calls: u64,
    pub success_calls: u64,
    pub failure_calls: u64,
    pub timeout_calls: u64,
    pub slow_calls: u64,
    pub p50_ms: f64,
    pub p90_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub recent_transitions: Vec<StateTransition>,
}

struct Inner {
    state: CircuitState,
    opened_at: Option<Instant>,
    consecutive_failures: u64,
    consecutive_successes: u64,
    last_failure_at: Option<Instant>,
    recent_elapsed: Ring<Duration>,
    transitions: Ring<StateTransition>,
}

/// A single algorithm's availability gate.
///
/// All counters besides `Inner`'s lock-protected fields are plain atomics so
/// `total_calls()` etc. can be read without contending the state lock.
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    inner: Mutex<Inner>,
    total_calls: AtomicU64,
    success_calls: AtomicU64,
    failure_calls: AtomicU64,
    timeout_calls: AtomicU64,
    slow_calls: AtomicU64,
}

const ELAPSED_RING_SIZE: usize = 100;
const TRANSITION_RING_SIZE: usize = 50;

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner {
                state: CircuitState::Closed,
                opened_at: None,
                consecutive_failures: 0,
                consecutive_successes: 0,
                last_failure_at: None,
                recent_elapsed: Ring::new(ELAPSED_RING_SIZE),
                transitions: Ring::new(TRANSITION_RING_SIZE),
            }),
            total_calls: AtomicU64::new(0),
            success_calls: AtomicU64::new(0),
            failure_calls: AtomicU64::new(0),
            timeout_calls: AtomicU64::new(0),
            slow_calls: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &CircuitBreakerConfig {
        &self.config
    }

    pub fn current_state(&self) -> CircuitState {
        self.inner.lock().state
    }

    /// Whether a call should be admitted right now, applying the
    /// OPEN → HALF-OPEN transition on the first call after `recovery_timeout`.
    fn allow_request(&self) -> bool {
        let mut inner = self.inner.lock();
        match inner.state {
            CircuitState::Closed => true,
            CircuitState::HalfOpen => true,
            CircuitState::Open => {
                let elapsed = inner
                    .opened_at
                    .map(|t| t.elapsed())
                    .unwrap_or(Duration::MAX);
                if elapsed >= self.config.recovery_timeout {
                    self.transition(&mut inner, CircuitState::HalfOpen, "recovery_timeout_elapsed");
                    inner.consecutive_successes = 0;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn transition(&self, inner: &mut Inner, to: CircuitState, reason: &str) {
        let from = inner.state;
        if from == to {
            return;
        }
        inner.state = to;
        if to == CircuitState::Open {
            inner.opened_at = Some(Instant::now());
        }
        inner.transitions.push(StateTransition {
            from,
            to,
            reason: reason.to_string(),
            at: Some(Instant::now()),
        });
        tracing::warn!(?from, ?to, reason, "circuit breaker state transition");
    }

    fn record_success(&self) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        self.success_calls.fetch_add(1, Ordering::Relaxed);

        let mut inner = self.inner.lock();
        match inner.state {
            CircuitState::Closed => {
                if inner.consecutive_failures > 0 {
                    inner.consecutive_failures -= 1;
                }
            }
            CircuitState::HalfOpen => {
                inner.consecutive_successes += 1;
                if inner.consecutive_successes >= self.config.success_threshold as u64 {
                    self.transition(&mut inner, CircuitState::Closed, "success_threshold_met");
                    inner.consecutive_failures = 0;
                    inner.consecutive_successes = 0;
                }
            }
            CircuitState::Open => {}
        }
    }

    fn record_failure(&self) {
        self.total_calls.fetch_add(1, Ordering::Relaxed);
        self.failure_calls.fetch_add(1, Ordering::Relaxed);

        let mut inner = self.inner.lock();
        inner.last_failure_at = Some(Instant::now());
        match inner.state {
            CircuitState::Closed => {
                inner.consecutive_failures += 1;
                if inner.consecutive_failures >= self.config.failure_threshold as u64 {
                    self.transition(&mut inner, CircuitState::Open, "failure_threshold_reached");
                }
            }
            CircuitState::HalfOpen => {
                self.transition(&mut inner, CircuitState::Open, "failure_in_half_open");
            }
            CircuitState::Open => {}
        }
    }

    fn record_elapsed(&self, elapsed: Duration) {
        let mut inner = self.inner.lock();
        inner.recent_elapsed.push(elapsed);
        if elapsed >= self.config.slow_call_threshold {
            self.slow_calls.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Run `f` through the breaker: reject fast if OPEN, otherwise invoke it
    /// with a hard `call_timeout`, record the outcome, and apply the state
    /// transition.
    ///
    /// `f` runs on a detached OS thread so a hung call is abandoned at the
    /// timeout boundary instead of blocking the caller past `call_timeout`:
    /// `call` returns as soon as `recv_timeout` elapses without waiting for
    /// that thread to finish. A `std::thread::scope` would defeat this — it
    /// joins every spawned thread before the scope itself returns, so the
    /// caller would still be blocked for as long as `f` takes to finish.
    pub fn call<T, E, F>(&self, f: F) -> Result<T, CircuitError<E>>
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        if !self.allow_request() {
            return Err(CircuitError::Open);
        }

        let start = Instant::now();
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let result = f();
            let _ = tx.send(result);
        });
        let outcome = rx.recv_timeout(self.config.call_timeout);

        let elapsed = start.elapsed();
        self.record_elapsed(elapsed);

        match outcome {
            Ok(Ok(value)) => {
                self.record_success();
                Ok(value)
            }
            Ok(Err(err)) => {
                self.record_failure();
                Err(CircuitError::Failed(err))
            }
            Err(_timeout) => {
                self.timeout_calls.fetch_add(1, Ordering::Relaxed);
                self.record_failure();
                Err(CircuitError::Timeout)
            }
        }
    }

    /// Administrative override: force the breaker open regardless of its
    /// failure history.
    pub fn force_open(&self, reason: &str) {
        let mut inner = self.inner.lock();
        self.transition(&mut inner, CircuitState::Open, reason);
    }

    /// Administrative override: force the breaker closed and reset counters.
    pub fn force_close(&self, reason: &str) {
        let mut inner = self.inner.lock();
        self.transition(&mut inner, CircuitState::Closed, reason);
        inner.consecutive_failures = 0;
        inner.consecutive_successes = 0;
    }

    pub fn stats(&self) -> CircuitStats {
        let inner = self.inner.lock();
        let mut elapsed_ms: Vec<f64> = inner
            .recent_elapsed
            .iter()
            .map(|d| d.as_secs_f64() * 1000.0)
            .collect();
        elapsed_ms.sort_by(|a, b| a.partial_cmp(b).unwrap());

        CircuitStats {
            state: inner.state,
            consecutive_failures: inner.consecutive_failures,
            consecutive_successes: inner.consecutive_successes,
            total_calls: self.total_calls.load(Ordering::Relaxed),
            success_calls: self.success_calls.load(Ordering::Relaxed),
            failure_calls: self.failure_calls.load(Ordering::Relaxed),
            timeout_calls: self.timeout_calls.load(Ordering::Relaxed),
            slow_calls: self.slow_calls.load(Ordering::Relaxed),
            p50_ms: percentile(&elapsed_ms, 0.50),
            p90_ms: percentile(&elapsed_ms, 0.90),
            p95_ms: percentile(&elapsed_ms, 0.95),
            p99_ms: percentile(&elapsed_ms, 0.99),
            recent_transitions: inner.transitions.to_vec(),
        }
    }

    /// p95 latency over the recent window, used by the selector's
    /// degradation override.
    pub fn p95_ms(&self) -> f64 {
        self.stats().p95_ms
    }
}

fn percentile(sorted_ms: &[f64], p: f64) -> f64 {
    if sorted_ms.is_empty() {
        return 0.0;
    }
    let rank = (p * (sorted_ms.len() as f64 - 1.0)).round() as usize;
    sorted_ms[rank.min(sorted_ms.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaker(failure_threshold: u32) -> CircuitBreaker {
        CircuitBreaker::new(CircuitBreakerConfig {
            failure_threshold,
            recovery_timeout: Duration::from_millis(20),
            success_threshold: 2,
            call_timeout: Duration::from_millis(200),
            slow_call_threshold: Duration::from_millis(100),
        })
    }

    #[test]
    fn starts_closed_and_admits_calls() {
        let cb = breaker(3);
        assert_eq!(cb.current_state(), CircuitState::Closed);
        let result: Result<i32, CircuitError<String>> = cb.call(|| Ok(42));
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn exactly_k_consecutive_failures_opens_the_circuit() {
        let cb = breaker(3);
        for _ in 0..3 {
            let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom".to_string()));
        }
        assert_eq!(cb.current_state(), CircuitState::Open);
    }

    #[test]
    fn mixed_sequence_with_fewer_than_k_failures_ending_in_success_stays_closed() {
        let cb = breaker(3);
        let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom".to_string()));
        let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom".to_string()));
        let _: Result<i32, CircuitError<String>> = cb.call(|| Ok(1));
        assert_eq!(cb.current_state(), CircuitState::Closed);
    }

    #[test]
    fn open_circuit_rejects_calls_before_recovery_timeout() {
        let cb = breaker(1);
        let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom".to_string()));
        assert_eq!(cb.current_state(), CircuitState::Open);

        let result: Result<i32, CircuitError<String>> = cb.call(|| Ok(1));
        assert!(matches!(result, Err(CircuitError::Open)));
    }

    #[test]
    fn first_call_after_recovery_timeout_is_admitted_and_goes_half_open() {
        let cb = breaker(1);
        let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom".to_string()));
        assert_eq!(cb.current_state(), CircuitState::Open);

        std::thread::sleep(Duration::from_millis(30));
        let result: Result<i32, CircuitError<String>> = cb.call(|| Ok(1));
        assert!(result.is_ok());
        assert_eq!(cb.current_state(), CircuitState::HalfOpen);
    }

    #[test]
    fn half_open_closes_only_after_success_threshold_consecutive_successes() {
        let cb = breaker(1);
        let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom".to_string()));
        std::thread::sleep(Duration::from_millis(30));

        let _: Result<i32, CircuitError<String>> = cb.call(|| Ok(1));
        assert_eq!(cb.current_state(), CircuitState::HalfOpen);

        let _: Result<i32, CircuitError<String>> = cb.call(|| Ok(1));
        assert_eq!(cb.current_state(), CircuitState::Closed);
    }

    #[test]
    fn half_open_reopens_on_any_failure() {
        let cb = breaker(1);
        let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom".to_string()));
        std::thread::sleep(Duration::from_millis(30));
        let _: Result<i32, CircuitError<String>> = cb.call(|| Ok(1));
        assert_eq!(cb.current_state(), CircuitState::HalfOpen);

        let _: Result<i32, CircuitError<String>> = cb.call(|| Err("boom again".to_string()));
        assert_eq!(cb.current_state(), CircuitState::Open);
    }

    #[test]
    fn timeout_counts_as_failure() {
        let cb = CircuitBreaker::new(CircuitBreakerConfig {
            failure_threshold: 1,
            recovery_timeout: Duration::from_millis(20),
            success_threshold: 1,
            call_timeout: Duration::from_millis(10),
            slow_call_threshold: Duration::from_millis(5),
        });
        let result: Result<i32, CircuitError<String>> = cb.call(|| {
            std::thread::sleep(Duration::from_millis(50));
            Ok(1)
        });
        assert!(matches!(result, Err(CircuitError::Timeout)));
        assert_eq!(cb.current_state(), CircuitState::Open);
        assert_eq!(cb.stats().timeout_calls, 1);
    }

    #[test]
    fn call_returns_at_the_timeout_boundary_without_joining_the_hung_thread() {
        let cb = CircuitBreaker::new(CircuitBreakerConfig {
            failure_threshold: 1,
            recovery_timeout: Duration::from_millis(20),
            success_threshold: 1,
            call_timeout: Duration::from_millis(10),
            slow_call_threshold: Duration::from_millis(5),
        });
        let before = Instant::now();
        let result: Result<i32, CircuitError<String>> = cb.call(|| {
            std::thread::sleep(Duration::from_secs(5));
            Ok(1)
        });
        assert!(matches!(result, Err(CircuitError::Timeout)));
        // `call` must hand control back close to `call_timeout`, not after
        // the 5s the hung closure takes to (eventually) finish.
        assert!(before.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn force_open_and_force_close_are_immediate() {
        let cb = breaker(5);
        cb.force_open("maintenance");
        assert_eq!(cb.current_state(), CircuitState::Open);
        cb.force_close("maintenance done");
        assert_eq!(cb.current_state(), CircuitState::Closed);
    }
}
