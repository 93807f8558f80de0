//! The algorithm identifier and the wire-level labels that can accompany it.
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five matching algorithms the orchestrator can dispatch to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmId {
    Nexten,
    Smart,
    Enhanced,
    Semantic,
    Hybrid,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 5] = [
        AlgorithmId::Nexten,
        AlgorithmId::Smart,
        AlgorithmId::Enhanced,
        AlgorithmId::Semantic,
        AlgorithmId::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::Nexten => "nexten",
            AlgorithmId::Smart => "smart",
            AlgorithmId::Enhanced => "enhanced",
            AlgorithmId::Semantic => "semantic",
            AlgorithmId::Hybrid => "hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "nexten" => Some(AlgorithmId::Nexten),
            "smart" => Some(AlgorithmId::Smart),
            "enhanced" => Some(AlgorithmId::Enhanced),
            "semantic" => Some(AlgorithmId::Semantic),
            "hybrid" => Some(AlgorithmId::Hybrid),
            _ => None,
        }
    }

    /// Static ordered list of algorithms to try if this one is unavailable
    /// or fails. Shared by the selector's degradation override and the
    /// fallback manager's execution policy so both reason about the same
    /// hierarchy.
    pub fn fallback_chain(&self) -> [AlgorithmId; 3] {
        match self {
            AlgorithmId::Nexten => [AlgorithmId::Enhanced, AlgorithmId::Smart, AlgorithmId::Semantic],
            AlgorithmId::Enhanced => [AlgorithmId::Smart, AlgorithmId::Semantic, AlgorithmId::Nexten],
            AlgorithmId::Smart => [AlgorithmId::Semantic, AlgorithmId::Enhanced, AlgorithmId::Nexten],
            AlgorithmId::Semantic => [AlgorithmId::Enhanced, AlgorithmId::Smart, AlgorithmId::Nexten],
            AlgorithmId::Hybrid => [AlgorithmId::Nexten, AlgorithmId::Enhanced, AlgorithmId::Smart],
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label used for `algorithm_used` / `alternative_algorithms` on the wire.
/// Most of the time this wraps a real [`AlgorithmId`]; the fallback manager
/// and orchestrator can also emit the synthetic labels below when every real
/// algorithm has been exhausted.
pub const LABEL_MINIMAL_FALLBACK: &str = "minimal_fallback";
pub const LABEL_NONE: &str = "none";
pub const LABEL_CRITICAL_FAILURE: &str = "critical_failure";

/// Reason code attached to a selector decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    CompleteData,
    GeoCritical,
    SeniorNoQuestionnaire,
    HighSkills,
    ValidationRequired,
    Default,
    Manual,
    FallbackAfterCircuitOpen,
    FallbackAfterDegradation,
}

impl SelectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionReason::CompleteData => "complete_data",
            SelectionReason::GeoCritical => "geo_critical",
            SelectionReason::SeniorNoQuestionnaire => "senior_no_questionnaire",
            SelectionReason::HighSkills => "high_skills",
            SelectionReason::ValidationRequired => "validation_required",
            SelectionReason::Default => "default",
            SelectionReason::Manual => "manual",
            SelectionReason::FallbackAfterCircuitOpen => "fallback_after_circuit_open",
            SelectionReason::FallbackAfterDegradation => "fallback_after_degradation",
        }
    }
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
