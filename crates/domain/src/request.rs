//! The unified match request, as received over `POST /match`.
use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmId;
use crate::candidate::{CandidateProfile, Questionnaire};
use crate::error::{DomainError, DomainResult};
use crate::offer::Offer;

/// Per-request algorithm override. `Auto` lets the selector decide;
/// `Manual` pins the request to one algorithm regardless of context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmChoice {
    #[default]
    Auto,
    Manual(AlgorithmId),
}

// Custom (de)serialization so the wire format is the bare string union
// `"auto"|"nexten"|"smart"|"enhanced"|"semantic"|"hybrid"` rather than the
// default tagged-enum representation.
impl Serialize for AlgorithmChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = match self {
            AlgorithmChoice::Auto => "auto",
            AlgorithmChoice::Manual(id) => id.as_str(),
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for AlgorithmChoice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == "auto" {
            return Ok(AlgorithmChoice::Auto);
        }
        AlgorithmId::parse(&raw)
            .map(AlgorithmChoice::Manual)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown algorithm '{raw}'")))
    }
}

/// Per-request configuration overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestConfig {
    #[serde(default)]
    pub algorithm: AlgorithmChoice,
    #[serde(default = "default_true")]
    pub enable_fallback: bool,
    #[serde(default)]
    pub include_explanations: bool,
    /// Accepted on the wire for forward compatibility; the orchestrator
    /// does not truncate `response.matches` by it — every offer gets a
    /// result entry unconditionally (spec invariant #1).
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub user_id: Option<String>,
    /// When true the selector treats requests as latency-sensitive and
    /// leans away from HYBRID.
    #[serde(default)]
    pub performance_mode: bool,
    /// Caller-forced validation requirement, independent of the
    /// complexity-derived `requires_validation` signal.
    #[serde(default)]
    pub require_validation: bool,
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> usize {
    20
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmChoice::Auto,
            enable_fallback: true,
            include_explanations: false,
            max_results: default_max_results(),
            user_id: None,
            performance_mode: false,
            require_validation: false,
        }
    }
}

/// The unified match request: a candidate, a set of offers, and config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRequest {
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub candidate_questionnaire: Option<Questionnaire>,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub config: RequestConfig,
}

impl MatchRequest {
    /// Validation performed before the request enters the pipeline.
    pub fn validate(&self) -> DomainResult<()> {
        if self.candidate.id.trim().is_empty() {
            return Err(DomainError::MissingCandidateId);
        }
        Ok(())
    }
}
