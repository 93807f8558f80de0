//! Stub ENHANCED executor, loosely modeled on
//! `original_source/.../smartmatch_enhanced.py`: same exact skill matching
//! as SMART, plus a textual insight when the match is strong.
use std::time::Duration;

use adapter::{AlgorithmConfig, CandidatePayload, NativeResult, OfferPayload};
use domain::AlgorithmId;

use crate::error::ExecutorResult;
use crate::executor::Executor;
use crate::features;
use crate::scoring::{score_pair, SkillMatchMode};

const STRONG_MATCH_THRESHOLD: f64 = 0.8;

pub struct EnhancedExecutor;

impl Executor for EnhancedExecutor {
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
                let mut result = score_pair(
                    offer.offer_id(),
                    &candidate_features,
                    &offer_features,
                    config,
                    SkillMatchMode::Exact,
                );
                if result.score >= STRONG_MATCH_THRESHOLD {
                    result.insights.push("strong overall fit".to_string());
                }
                result
            })
            .collect())
    }

    fn max_execution_time(&self) -> Duration {
        Duration::from_millis(700)
    }

    fn name(&self) -> AlgorithmId {
        AlgorithmId::Enhanced
    }
}
