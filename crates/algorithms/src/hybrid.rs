//! Stub HYBRID executor: blends NEXTEN's exact-match scoring with
//! SEMANTIC's looser substring scoring, averaging the two — HYBRID is the
//! algorithm spec.md reserves for cases where neither signal alone is
//! trusted.
use std::time::Duration;

use adapter::{AlgorithmConfig, CandidatePayload, NativeCategoryScores, NativeResult, OfferPayload};
use domain::AlgorithmId;

use crate::error::ExecutorResult;
use crate::executor::Executor;
use crate::features;
use crate::scoring::{score_pair, SkillMatchMode};

pub struct HybridExecutor;

fn blend(exact: NativeResult, fuzzy: NativeResult) -> NativeResult {
    let score = (exact.score + fuzzy.score) / 2.0;
    let confidence = exact.confidence.zip(fuzzy.confidence).map(|(a, b)| (a + b) / 2.0);
    let category_scores = exact.category_scores.zip(fuzzy.category_scores).map(|(a, b)| NativeCategoryScores {
        skills: avg(a.skills, b.skills),
        experience: avg(a.experience, b.experience),
        location: avg(a.location, b.location),
        culture: avg(a.culture, b.culture),
        questionnaire: avg(a.questionnaire, b.questionnaire),
    });

    let mut matched_skills = exact.matched_skills;
    for skill in fuzzy.matched_skills {
        if !matched_skills.contains(&skill) {
            matched_skills.push(skill);
        }
    }

    NativeResult {
        offer_id: exact.offer_id,
        score,
        confidence,
        category_scores,
        matched_skills,
        missing_skills: fuzzy.missing_skills,
        explanation: None,
        insights: vec![],
        metadata: Default::default(),
    }
}

fn avg(a: Option<f32>, b: Option<f32>) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        (Some(a), None) | (None, Some(a)) => Some(a),
        (None, None) => None,
    }
}

impl Executor for HybridExecutor {
    fn execute(
        &self,
        candidate: &CandidatePayload,
        offers: &[OfferPayload],
        config: &AlgorithmConfig,
    ) -> ExecutorResult<Vec<NativeResult>> {
        let candidate_features = features::extract_candidate(candidate);
        Ok(offers
            .iter()
            .map(|offer| {
                let offer_features = features::extract_offer(offer);
                let exact = score_pair(
                    offer.offer_id(),
                    &candidate_features,
                    &offer_features,
                    config,
                    SkillMatchMode::Exact,
                );
                let fuzzy = score_pair(
                    offer.offer_id(),
                    &candidate_features,
                    &offer_features,
                    config,
                    SkillMatchMode::Substring,
                );
                blend(exact, fuzzy)
            })
            .collect())
    }

    fn max_execution_time(&self) -> Duration {
        Duration::from_millis(1500)
    }

    fn name(&self) -> AlgorithmId {
        AlgorithmId::Hybrid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter::{GenericCandidate, GenericOffer};

    #[test]
    fn blend_averages_exact_and_fuzzy_scores() {
        let candidate = CandidatePayload::Generic(GenericCandidate {
            id: "c1".into(),
            skills: vec![serde_json::json!({"name": "rust"})],
            total_experience_years: 3.0,
            ..Default::default()
        });
        let offer = OfferPayload::Generic(GenericOffer {
            offer_id: "o1".into(),
            required_skills: vec!["rustlang".into()],
            experience_min: 1,
            remote_policy: "remote".into(),
            ..Default::default()
        });
        let executor = HybridExecutor;
        let results = executor
            .execute(&candidate, &[offer], &AlgorithmConfig::default())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].score >= 0.0 && results[0].score <= 1.0 + f64::EPSILON);
    }
}
