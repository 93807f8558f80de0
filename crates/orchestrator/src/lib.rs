//! The Orchestrator: the single place that drives a `MatchRequest` through
//! context analysis, algorithm selection, data adaptation,
//! circuit-breaker-gated execution, fallback, and performance monitoring,
//! and assembles the unified `MatchResponse`.
mod concurrency;
mod config;
mod error;

pub use concurrency::ConcurrencyConfig;
pub use config::CoreConfig;
pub use error::{OrchestratorError, OrchestratorResult};

use std::sync::Arc;
use std::time::Instant;

use concurrency::ConcurrencyLimiter;

use adapter::adapt_request;
use algorithms::Registry;
use context::ContextAnalyzer;
use domain::{
    MatchRequest, MatchResponse, MatchResult, ResponseMetadata, ResponseStatus, SelectionReason,
};
use fallback::FallbackOutcome;
use monitor::{PerformanceMonitor, PerformanceRecord};
use resilience::CircuitBreakerManager;
use selector::AlgorithmSelector;

/// Owns every pipeline component and exposes the one entry point the HTTP
/// layer calls: [`Orchestrator::process`].
pub struct Orchestrator {
    context_analyzer: ContextAnalyzer,
    selector: AlgorithmSelector,
    registry: Registry,
    circuits: Arc<CircuitBreakerManager>,
    monitor: Arc<PerformanceMonitor>,
    concurrency: Arc<ConcurrencyLimiter>,
    config: CoreConfig,
}

impl Orchestrator {
    pub fn new(config: CoreConfig) -> Self {
        let circuits = Arc::new(CircuitBreakerManager::new(config.circuit_breaker));
        let monitor = Arc::new(PerformanceMonitor::new(config.alert_thresholds));
        let selector = AlgorithmSelector::new(circuits.clone(), monitor.clone(), config.selector);
        Self {
            context_analyzer: ContextAnalyzer::new(config.context_cache_capacity),
            selector,
            registry: Registry::with_defaults(),
            circuits,
            monitor,
            concurrency: Arc::new(ConcurrencyLimiter::new(config.concurrency)),
            config,
        }
    }

    pub fn circuits(&self) -> &Arc<CircuitBreakerManager> {
        &self.circuits
    }

    pub fn monitor(&self) -> &Arc<PerformanceMonitor> {
        &self.monitor
    }

    /// Run the full lifecycle: validate, analyze, select, adapt, execute
    /// (circuit-gated), normalize, fall back if needed, record, and
    /// assemble the response. Never returns an error for a degraded match —
    /// only a structurally invalid request is rejected.
    pub fn process(&self, request_id: String, request: &MatchRequest) -> OrchestratorResult<MatchResponse> {
        request.validate()?;
        let context = self.context_analyzer.analyze(request)?;

        let outcome = self.selector.select(&context, &request.config);
        let started = Instant::now();

        let executor = self.registry.get(outcome.algorithm);
        let adapted = adapt_request(
            outcome.algorithm,
            &request.candidate,
            request.candidate_questionnaire.as_ref(),
            &request.offers,
        );
        let breaker = self.circuits.get(outcome.algorithm);

        let primary = breaker.call(move || executor.execute(&adapted.candidate, &adapted.offers, &adapted.config));

        let (mut matches, algorithm_used, degraded, warning) = match primary {
            Ok(native) => {
                let elapsed = started.elapsed();
                let mut matches = adapter::normalize_result(
                    native,
                    outcome.algorithm,
                    &request.offers,
                    elapsed.as_millis() as u64,
                );
                self.record(outcome.algorithm, &matches, elapsed, true, request.config.user_id.as_deref());

                // The selector's degradation override already swapped in a
                // healthier algorithm before execution even started (the
                // original pick's circuit was open, or it was running hot);
                // mark every result as a fallback even though this call
                // itself succeeded, per the circuit-open-induces-fallback
                // scenario.
                if matches!(
                    outcome.reason,
                    SelectionReason::FallbackAfterCircuitOpen | SelectionReason::FallbackAfterDegradation
                ) {
                    for m in matches.iter_mut() {
                        m.is_fallback = Some(true);
                        m.original_algorithm = Some(outcome.original_algorithm);
                        m.fallback_algorithm = Some(outcome.algorithm);
                    }
                }

                (matches, outcome.algorithm.as_str().to_string(), outcome.degraded, None)
            }
            Err(primary_err) => {
                tracing::warn!(algorithm = %outcome.algorithm, error = %primary_err, "primary execution failed");
                self.record_failure(outcome.algorithm, started.elapsed(), request.config.user_id.as_deref());

                let fallback_outcome = fallback::execute_chain(
                    outcome.algorithm,
                    &request.candidate,
                    request.candidate_questionnaire.as_ref(),
                    &request.offers,
                    &self.registry,
                    &self.circuits,
                    request.config.enable_fallback,
                    self.config.fallback,
                );

                match fallback_outcome {
                    FallbackOutcome::Recovered { matches, fallback_algorithm } => (
                        matches,
                        fallback_algorithm.as_str().to_string(),
                        true,
                        Some(format!(
                            "primary algorithm '{}' failed, recovered via fallback to '{}'",
                            outcome.algorithm, fallback_algorithm
                        )),
                    ),
                    FallbackOutcome::Minimal { matches } => (
                        matches,
                        domain::LABEL_MINIMAL_FALLBACK.to_string(),
                        true,
                        Some(format!(
                            "primary algorithm '{}' and its entire fallback chain failed; returning minimal-confidence estimates",
                            outcome.algorithm
                        )),
                    ),
                    FallbackOutcome::CriticalFailure { matches } => (
                        matches,
                        domain::LABEL_CRITICAL_FAILURE.to_string(),
                        true,
                        Some("matching unavailable: fallback disabled and primary algorithm failed".to_string()),
                    ),
                }
            }
        };

        if !request.config.include_explanations {
            strip_explanations(&mut matches);
        }

        let mut response = MatchResponse {
            matches,
            metadata: ResponseMetadata {
                algorithm_used,
                selection_reason: outcome.reason.as_str().to_string(),
                context_analysis: Some(context),
                execution_time_ms: started.elapsed().as_millis() as u64,
                alternative_algorithms: outcome
                    .algorithm
                    .fallback_chain()
                    .iter()
                    .map(|a| a.as_str().to_string())
                    .collect(),
                degraded: Some(degraded),
            },
            request_id,
            timestamp: chrono::Utc::now(),
            status: status_for(degraded, &warning),
            warning,
        };

        response.sort_matches();

        Ok(response)
    }

    /// Async entry point for the HTTP layer: pre-select just enough to know
    /// which algorithm's slot to gate on, wait for a free slot in both the
    /// global and per-algorithm worker pools, then run the (synchronous,
    /// potentially slow) [`Orchestrator::process`] pipeline on the blocking
    /// thread pool via `spawn_blocking` so it never occupies an async
    /// runtime worker thread directly.
    ///
    /// If this future is dropped before the blocking task finishes — the
    /// caller disconnected, or an outer timeout fired — the spawned task
    /// keeps running to completion in the background, but the call is
    /// recorded as `cancelled` rather than left unaccounted for.
    pub async fn process_async(
        self: Arc<Self>,
        request_id: String,
        request: MatchRequest,
    ) -> OrchestratorResult<MatchResponse> {
        request.validate()?;
        let context = self.context_analyzer.analyze(&request)?;
        let outcome = self.selector.select(&context, &request.config);
        let user_id = request.config.user_id.clone();

        let permit = self.concurrency.acquire(outcome.algorithm).await;
        let mut guard = CancellationGuard::new(self.monitor.clone(), outcome.algorithm, user_id);

        let pipeline = self.clone();
        let join = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            pipeline.process(request_id, &request)
        })
        .await;

        guard.disarm();

        match join {
            Ok(result) => result,
            Err(join_err) => {
                tracing::warn!(error = %join_err, "matching pipeline task did not complete");
                Err(OrchestratorError::Cancelled)
            }
        }
    }

    fn record(&self, algorithm: domain::AlgorithmId, matches: &[MatchResult], elapsed: std::time::Duration, success: bool, user_id: Option<&str>) {
        let avg_confidence = if matches.is_empty() {
            None
        } else {
            Some(matches.iter().map(|m| m.confidence).sum::<f32>() / matches.len() as f32)
        };
        self.monitor.record(PerformanceRecord {
            algorithm,
            elapsed_ms: elapsed.as_millis() as u64,
            result_count: matches.len(),
            success,
            avg_confidence,
            timestamp: chrono::Utc::now(),
            user_id: user_id.map(String::from),
            cancelled: false,
        });
    }

    fn record_failure(&self, algorithm: domain::AlgorithmId, elapsed: std::time::Duration, user_id: Option<&str>) {
        self.monitor.record(PerformanceRecord {
            algorithm,
            elapsed_ms: elapsed.as_millis() as u64,
            result_count: 0,
            success: false,
            avg_confidence: None,
            timestamp: chrono::Utc::now(),
            user_id: user_id.map(String::from),
            cancelled: false,
        });
    }
}

/// Records a `cancelled` [`PerformanceRecord`] if dropped while still
/// armed. `disarm` is called once the guarded call actually completes (with
/// either a result or a join error), so a normal finish never double-records.
struct CancellationGuard {
    monitor: Arc<PerformanceMonitor>,
    algorithm: domain::AlgorithmId,
    user_id: Option<String>,
    started: Instant,
    armed: bool,
}

impl CancellationGuard {
    fn new(monitor: Arc<PerformanceMonitor>, algorithm: domain::AlgorithmId, user_id: Option<String>) -> Self {
        Self { monitor, algorithm, user_id, started: Instant::now(), armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for CancellationGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.monitor.record(PerformanceRecord {
            algorithm: self.algorithm,
            elapsed_ms: self.started.elapsed().as_millis() as u64,
            result_count: 0,
            success: false,
            avg_confidence: None,
            timestamp: chrono::Utc::now(),
            user_id: self.user_id.clone(),
            cancelled: true,
        });
    }
}

fn strip_explanations(matches: &mut [MatchResult]) {
    for m in matches.iter_mut() {
        if m.is_fallback != Some(true) {
            m.explanation = None;
            m.insights = None;
        }
    }
}

fn status_for(degraded: bool, warning: &Option<String>) -> ResponseStatus {
    if warning.as_deref().map(|w| w.contains("critical failure") || w.contains("unavailable")).unwrap_or(false) {
        ResponseStatus::CriticalError
    } else if degraded {
        ResponseStatus::Degraded
    } else {
        ResponseStatus::Ok
    }
}
