//! Synthesizes responses for when no algorithm, not even a fallback one,
//! produced usable output. Neither path calls an executor — both fabricate
//! deterministic scores so callers never get an empty match list.
use domain::{CategoryScores, MatchResult, LABEL_CRITICAL_FAILURE, LABEL_MINIMAL_FALLBACK};

use crate::config::FallbackConfig;

/// Minimal-response synthesis: every offer gets a synthetic low-confidence
/// entry, score `minimal_score_base + i*epsilon` so results stay
/// deterministically distinguishable without favoring any one offer.
pub fn minimal_response(offer_ids: &[String], config: FallbackConfig) -> Vec<MatchResult> {
    offer_ids
        .iter()
        .enumerate()
        .map(|(i, offer_id)| {
            let score = (config.minimal_score_base + i as f64 * config.minimal_score_epsilon)
                .clamp(0.0, 1.0) as f32;
            MatchResult {
                offer_id: offer_id.clone(),
                overall_score: score,
                confidence: config.degraded_confidence,
                category_scores: CategoryScores {
                    skills: score,
                    experience: score,
                    location: score,
                    culture: score,
                    questionnaire: None,
                },
                matched_skills: vec![],
                missing_skills: vec![],
                explanation: Some("minimal fallback: no algorithm produced a usable result".to_string()),
                insights: None,
                algorithm_used: LABEL_MINIMAL_FALLBACK.to_string(),
                processing_time_ms: 0,
                is_fallback: Some(true),
                original_algorithm: None,
                fallback_algorithm: None,
            }
        })
        .collect()
}

/// Emergency/critical-failure path: every fallback attempt *and* minimal
/// synthesis is considered too risky to trust (e.g. fallback disabled by
/// the caller). Caps at the first `emergency_offer_cap` offers so even a
/// huge request returns quickly.
pub fn critical_failure_response(offer_ids: &[String], config: FallbackConfig) -> Vec<MatchResult> {
    offer_ids
        .iter()
        .take(config.emergency_offer_cap)
        .map(|offer_id| MatchResult {
            offer_id: offer_id.clone(),
            overall_score: 0.2,
            confidence: 0.1,
            category_scores: CategoryScores {
                skills: 0.2,
                experience: 0.2,
                location: 0.2,
                culture: 0.2,
                questionnaire: None,
            },
            matched_skills: vec![],
            missing_skills: vec![],
            explanation: Some("critical failure: matching unavailable".to_string()),
            insights: None,
            algorithm_used: LABEL_CRITICAL_FAILURE.to_string(),
            processing_time_ms: 0,
            is_fallback: Some(true),
            original_algorithm: None,
            fallback_algorithm: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scores_increase_monotonically_by_epsilon() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let results = minimal_response(&ids, FallbackConfig::default());
        assert!(results[1].overall_score > results[0].overall_score);
        assert!(results[2].overall_score > results[1].overall_score);
        assert!(results.iter().all(|r| r.algorithm_used == LABEL_MINIMAL_FALLBACK));
    }

    #[test]
    fn critical_failure_caps_at_configured_limit() {
        let ids: Vec<String> = (0..25).map(|i| i.to_string()).collect();
        let results = critical_failure_response(&ids, FallbackConfig::default());
        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|r| r.algorithm_used == LABEL_CRITICAL_FAILURE));
    }
}
