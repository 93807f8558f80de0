//! Translate an executor's native results back into the unified
//! `MatchResult` shape, guaranteeing one result per requested offer (§8's
//! "adapter round-trip" invariant: `len(matches) == len(offers)`).
use std::collections::HashMap;

use domain::{AlgorithmId, CategoryScores, MatchResult, Offer};

use crate::types::NativeResult;

const DEGRADED_SCORE: f32 = 0.5;
const DEGRADED_CONFIDENCE: f32 = 0.2;
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Normalize one algorithm's native results against the original offer
/// list. Every offer gets exactly one entry: a real translation when the
/// executor returned a usable result for it, a degraded placeholder
/// otherwise. `processing_time_ms` is stamped uniformly by the caller since
/// it reflects the whole execution, not a per-item cost.
pub fn normalize_result(
    native: Vec<NativeResult>,
    algorithm: AlgorithmId,
    offers: &[Offer],
    processing_time_ms: u64,
) -> Vec<MatchResult> {
    let mut by_offer: HashMap<String, NativeResult> =
        native.into_iter().map(|r| (r.offer_id.clone(), r)).collect();

    offers
        .iter()
        .map(|offer| {
            match by_offer.remove(&offer.id) {
                Some(result) => from_native(result, algorithm, processing_time_ms),
                None => degraded(offer, algorithm, processing_time_ms),
            }
        })
        .collect()
}

fn from_native(native: NativeResult, algorithm: AlgorithmId, processing_time_ms: u64) -> MatchResult {
    let overall = if native.score.is_finite() {
        native.score as f32
    } else {
        0.0
    };
    let confidence = native.confidence.unwrap_or(DEFAULT_CONFIDENCE);
    let confidence = if confidence.is_finite() { confidence as f32 } else { 0.0 };

    let category_scores = native
        .category_scores
        .map(|c| CategoryScores {
            skills: c.skills.unwrap_or(overall),
            experience: c.experience.unwrap_or(overall),
            location: c.location.unwrap_or(overall),
            culture: c.culture.unwrap_or(overall),
            questionnaire: c.questionnaire,
        })
        .unwrap_or(CategoryScores {
            skills: overall,
            experience: overall,
            location: overall,
            culture: overall,
            questionnaire: None,
        });

    MatchResult {
        offer_id: native.offer_id,
        overall_score: overall,
        confidence,
        category_scores,
        matched_skills: native.matched_skills,
        missing_skills: native.missing_skills,
        explanation: native.explanation,
        insights: if native.insights.is_empty() { None } else { Some(native.insights) },
        algorithm_used: algorithm.as_str().to_string(),
        processing_time_ms,
        is_fallback: None,
        original_algorithm: None,
        fallback_algorithm: None,
    }
    .clamp_scores()
}

fn degraded(offer: &Offer, algorithm: AlgorithmId, processing_time_ms: u64) -> MatchResult {
    tracing::warn!(offer_id = %offer.id, %algorithm, "adapter normalization: no usable native result, degrading");
    MatchResult {
        offer_id: offer.id.clone(),
        overall_score: DEGRADED_SCORE,
        confidence: DEGRADED_CONFIDENCE,
        category_scores: CategoryScores {
            skills: DEGRADED_SCORE,
            experience: DEGRADED_SCORE,
            location: DEGRADED_SCORE,
            culture: DEGRADED_SCORE,
            questionnaire: None,
        },
        matched_skills: vec![],
        missing_skills: vec![],
        explanation: Some("fallback: adapter normalization failed".to_string()),
        insights: None,
        algorithm_used: algorithm.as_str().to_string(),
        processing_time_ms,
        is_fallback: None,
        original_algorithm: None,
        fallback_algorithm: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ExperienceBand, Location, RemotePolicy};

    fn offer(id: &str) -> Offer {
        Offer {
            id: id.into(),
            title: "t".into(),
            company: None,
            required_skills: vec![],
            preferred_skills: vec![],
            experience: ExperienceBand { min: 0, max: None },
            location: Location::default(),
            remote_policy: RemotePolicy::Office,
            salary: None,
            company_questionnaire: None,
            commute_km: None,
        }
    }

    #[test]
    fn missing_native_result_produces_a_degraded_entry() {
        let offers = vec![offer("o1"), offer("o2")];
        let native = vec![NativeResult {
            offer_id: "o1".into(),
            score: 0.9,
            ..Default::default()
        }];
        let results = normalize_result(native, AlgorithmId::Smart, &offers, 5);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].overall_score, 0.9);
        assert_eq!(results[1].overall_score, DEGRADED_SCORE);
        assert!(results[1].explanation.is_some());
    }

    #[test]
    fn result_count_always_matches_offer_count() {
        let offers = vec![offer("o1"), offer("o2"), offer("o3")];
        let results = normalize_result(vec![], AlgorithmId::Nexten, &offers, 1);
        assert_eq!(results.len(), offers.len());
    }

    #[test]
    fn non_finite_score_clamps_to_zero() {
        let offers = vec![offer("o1")];
        let native = vec![NativeResult {
            offer_id: "o1".into(),
            score: f64::NAN,
            ..Default::default()
        }];
        let results = normalize_result(native, AlgorithmId::Enhanced, &offers, 1);
        assert_eq!(results[0].overall_score, 0.0);
    }
}
