//! Stub NEXTEN executor, loosely modeled on what
//! `original_source/.../nexten_adapter.py` computes over the adapted
//! payload: exact skill matching plus a questionnaire-weighted culture
//! term, since NEXTEN is the only algorithm that receives one.
use std::time::Duration;

use adapter::{AlgorithmConfig, CandidatePayload, NativeResult, OfferPayload};
use domain::AlgorithmId;

use crate::error::ExecutorResult;
use crate::executor::Executor;
use crate::features;
use crate::scoring::{score_pair, SkillMatchMode};

pub struct NextenExecutor;

impl Executor for NextenExecutor {
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
                    SkillMatchMode::Exact,
                )
            })
            .collect())
    }

    fn max_execution_time(&self) -> Duration {
        Duration::from_millis(800)
    }

    fn name(&self) -> AlgorithmId {
        AlgorithmId::Nexten
    }
}
