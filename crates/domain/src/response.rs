//! The unified response envelope returned from `POST /match`.
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::result::MatchResult;

/// Overall request outcome; drives the HTTP status-vs-body split. Callers
/// always receive HTTP 200 for a well-formed request, even when matching
/// degraded or failed outright — only a malformed request gets a 4xx.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    Degraded,
    CriticalError,
}

/// Metadata describing how a response was produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseMetadata {
    pub algorithm_used: String,
    pub selection_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_analysis: Option<Context>,
    pub execution_time_ms: u64,
    #[serde(default)]
    pub alternative_algorithms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
}

/// The unified response envelope returned to callers of the match endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
    pub metadata: ResponseMetadata,
    pub request_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl MatchResponse {
    /// Sort matches descending by `(overall_score, confidence)`. Uses a
    /// stable sort so exact ties keep their original relative order.
    pub fn sort_matches(&mut self) {
        self.matches.sort_by(|a, b| {
            b.overall_score
                .partial_cmp(&a.overall_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.confidence
                        .partial_cmp(&a.confidence)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::CategoryScores;

    fn hit(offer_id: &str, score: f32, confidence: f32) -> MatchResult {
        MatchResult {
            offer_id: offer_id.into(),
            overall_score: score,
            confidence,
            category_scores: CategoryScores::default(),
            matched_skills: vec![],
            missing_skills: vec![],
            explanation: None,
            insights: None,
            algorithm_used: "smart".into(),
            processing_time_ms: 1,
            is_fallback: None,
            original_algorithm: None,
            fallback_algorithm: None,
        }
    }

    #[test]
    fn sort_is_descending_and_stable_on_ties() {
        let mut resp = MatchResponse {
            matches: vec![
                hit("a", 0.5, 0.9),
                hit("b", 0.9, 0.5),
                hit("c", 0.5, 0.9),
                hit("d", 0.9, 0.9),
            ],
            metadata: ResponseMetadata {
                algorithm_used: "smart".into(),
                selection_reason: "default".into(),
                context_analysis: None,
                execution_time_ms: 1,
                alternative_algorithms: vec![],
                degraded: None,
            },
            request_id: "r1".into(),
            timestamp: chrono::Utc::now(),
            status: ResponseStatus::Ok,
            warning: None,
        };
        resp.sort_matches();
        let ids: Vec<&str> = resp.matches.iter().map(|m| m.offer_id.as_str()).collect();
        // d (0.9/0.9) beats b (0.9/0.5); a and c tie exactly and keep input order.
        assert_eq!(ids, vec!["d", "b", "a", "c"]);
    }
}
