use serde::{Deserialize, Serialize};

/// Tunables for the fallback manager's chain walk and degraded-response
/// synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// How many chain entries to try before giving up and synthesizing a
    /// minimal response. The static chain has 3 entries; this can cap it
    /// lower.
    pub max_fallback_attempts: usize,
    pub minimal_score_base: f64,
    pub minimal_score_epsilon: f64,
    pub degraded_confidence: f32,
    pub fallback_confidence_factor: f32,
    pub emergency_offer_cap: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            max_fallback_attempts: 3,
            minimal_score_base: 0.3,
            minimal_score_epsilon: 0.001,
            degraded_confidence: 0.6,
            fallback_confidence_factor: 0.9,
            emergency_offer_cap: 10,
        }
    }
}
