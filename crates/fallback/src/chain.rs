//! Sequential, circuit-aware walk of an algorithm's static fallback chain.
use std::sync::Arc;

use adapter::adapt_request;
use algorithms::Registry;
use domain::{AlgorithmId, CandidateProfile, MatchResult, Offer, Questionnaire};
use resilience::CircuitBreakerManager;

use crate::config::FallbackConfig;
use crate::minimal::{critical_failure_response, minimal_response};

/// What the fallback manager actually produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackOutcome {
    /// One of the chain entries succeeded.
    Recovered {
        matches: Vec<MatchResult>,
        fallback_algorithm: AlgorithmId,
    },
    /// Every chain entry failed or was unavailable; scores are synthetic.
    Minimal { matches: Vec<MatchResult> },
    /// Fallback was disabled, or synthesis itself was judged too risky
    /// (e.g. an empty offer list reaching this path at all would be a bug
    /// upstream) — capped, very low confidence, no real scoring attempted.
    CriticalFailure { matches: Vec<MatchResult> },
}

/// Walk `original`'s static fallback chain, adapting and executing each
/// candidate algorithm in turn (skipping algorithms whose circuit is OPEN),
/// until one succeeds or `config.max_fallback_attempts` entries have been
/// tried. Falls through to minimal-response synthesis, or to the
/// critical-failure path when fallback is disabled entirely.
pub fn execute_chain(
    original: AlgorithmId,
    candidate: &CandidateProfile,
    questionnaire: Option<&Questionnaire>,
    offers: &[Offer],
    registry: &Registry,
    circuits: &Arc<CircuitBreakerManager>,
    enable_fallback: bool,
    config: FallbackConfig,
) -> FallbackOutcome {
    let offer_ids: Vec<String> = offers.iter().map(|o| o.id.clone()).collect();

    if !enable_fallback {
        tracing::error!(%original, "fallback disabled for this request, returning critical failure");
        return FallbackOutcome::CriticalFailure {
            matches: critical_failure_response(&offer_ids, config),
        };
    }

    let chain = original.fallback_chain();
    for &candidate_algorithm in chain.iter().take(config.max_fallback_attempts) {
        if !circuits.is_available(candidate_algorithm) {
            tracing::debug!(%candidate_algorithm, "fallback chain: skipping algorithm with open circuit");
            continue;
        }

        let executor = registry.get(candidate_algorithm);
        let breaker = circuits.get(candidate_algorithm);
        let adapted = adapt_request(candidate_algorithm, candidate, questionnaire, offers);

        let outcome = breaker.call(move || executor.execute(&adapted.candidate, &adapted.offers, &adapted.config));
        match outcome {
            Ok(native) => {
                let matches = adapter::normalize_result(native, candidate_algorithm, offers, 0)
                    .into_iter()
                    .map(|m| mark_as_fallback(m, original, candidate_algorithm, config.fallback_confidence_factor))
                    .collect();
                tracing::info!(%original, %candidate_algorithm, "fallback chain recovered");
                return FallbackOutcome::Recovered {
                    matches,
                    fallback_algorithm: candidate_algorithm,
                };
            }
            Err(err) => {
                tracing::warn!(%candidate_algorithm, error = %err, "fallback chain attempt failed");
            }
        }
    }

    tracing::error!(%original, "fallback chain exhausted, synthesizing minimal response");
    FallbackOutcome::Minimal {
        matches: minimal_response(&offer_ids, config),
    }
}

fn mark_as_fallback(
    mut result: MatchResult,
    original: AlgorithmId,
    fallback_algorithm: AlgorithmId,
    confidence_factor: f32,
) -> MatchResult {
    result.confidence = (result.confidence * confidence_factor).clamp(0.0, 1.0);
    result.is_fallback = Some(true);
    result.original_algorithm = Some(original);
    result.fallback_algorithm = Some(fallback_algorithm);
    result
}
