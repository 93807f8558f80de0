//! Stub SEMANTIC executor, loosely modeled on
//! `original_source/.../smartmatch_semantic_enhanced.py`: substring-based
//! skill matching stands in for real embedding similarity, since the
//! actual scoring model is opaque/out of scope here.
use std::time::Duration;

use adapter::{AlgorithmConfig, CandidatePayload, NativeResult, OfferPayload};
use domain::AlgorithmId;

use crate::error::ExecutorResult;
use crate::executor::Executor;
use crate::features;
use crate::scoring::{score_pair, SkillMatchMode};

pub struct SemanticExecutor;

impl Executor for SemanticExecutor {
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
                score_pair(
                    offer.offer_id(),
                    &candidate_features,
                    &offer_features,
                    config,
                    SkillMatchMode::Substring,
                )
            })
            .collect())
    }

    fn max_execution_time(&self) -> Duration {
        Duration::from_millis(1200)
    }

    fn name(&self) -> AlgorithmId {
        AlgorithmId::Semantic
    }
}
