//! The seam between the orchestrator and a matching algorithm. An
//! [`Executor`] is the opaque black box the rest of the system never looks
//! inside — it receives an already-adapted payload and returns native
//! results, nothing more.
use std::time::Duration;

use adapter::{AlgorithmConfig, CandidatePayload, NativeResult, OfferPayload};
use domain::AlgorithmId;

use crate::error::ExecutorResult;

pub trait Executor: Send + Sync {
    fn execute(
        &self,
        candidate: &CandidatePayload,
        offers: &[OfferPayload],
        config: &AlgorithmConfig,
    ) -> ExecutorResult<Vec<NativeResult>>;

    /// Budget the circuit breaker enforces this executor's calls against.
    fn max_execution_time(&self) -> Duration;

    fn name(&self) -> AlgorithmId;
}
