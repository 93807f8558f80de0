//! Unified match result types returned to the caller.
use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmId;
use crate::error::clamp_unit;

/// Per-category breakdown of a match score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoryScores {
    pub skills: f32,
    pub experience: f32,
    pub location: f32,
    pub culture: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<f32>,
}

/// One scored pairing of the candidate with one offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub offer_id: String,
    pub overall_score: f32,
    pub confidence: f32,
    pub category_scores: CategoryScores,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<String>>,
    pub algorithm_used: String,
    pub processing_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fallback: Option<bool>,
    /// The algorithm the selector originally picked, before this result was
    /// produced by a substitute. Set only alongside `is_fallback: true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_algorithm: Option<AlgorithmId>,
    /// The algorithm that actually produced this result when it differs
    /// from the original pick. Set only alongside `is_fallback: true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_algorithm: Option<AlgorithmId>,
}

impl MatchResult {
    /// Clamp `overall_score`/`confidence` into `[0,1]`, mapping NaN to `0.0`.
    /// Every result that leaves the pipeline must satisfy this.
    pub fn clamp_scores(mut self) -> Self {
        self.overall_score = clamp_unit(self.overall_score);
        self.confidence = clamp_unit(self.confidence);
        self
    }
}
