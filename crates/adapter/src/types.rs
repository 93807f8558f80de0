//! Canonical typed schemas for each direction of the adapter: the shape an
//! algorithm executor receives (`CandidatePayload`/`OfferPayload`), and the
//! shape it returns (`NativeResult`). Every field an algorithm might read is
//! named here; nothing passes through as a raw untyped map except the
//! deliberately-opaque `metadata`/`questionnaire` sub-objects.
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// NEXTEN's nested candidate shape: `{cv, questionnaire, preferences}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NextenCv {
    pub personal_info: JsonMap<String, JsonValue>,
    pub experiences: Vec<JsonValue>,
    pub skills: Vec<JsonValue>,
    pub education: Vec<JsonValue>,
    pub certifications: Vec<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NextenCandidate {
    pub cv: NextenCv,
    pub questionnaire: JsonMap<String, JsonValue>,
    pub preferences: JsonMap<String, JsonValue>,
}

/// NEXTEN's nested offer shape: `{job_info, company_info, requirements,
/// questionnaire, conditions}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NextenOffer {
    pub offer_id: String,
    pub job_info: JsonMap<String, JsonValue>,
    pub company_info: JsonMap<String, JsonValue>,
    pub requirements: JsonMap<String, JsonValue>,
    pub questionnaire: JsonMap<String, JsonValue>,
    pub conditions: JsonMap<String, JsonValue>,
}

/// The flat, 1:1 shape used by SMART/ENHANCED/SEMANTIC/HYBRID: fields map
/// directly onto the unified candidate, nothing nested or renamed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GenericCandidate {
    pub id: String,
    pub skills: Vec<JsonValue>,
    pub experiences: Vec<JsonValue>,
    pub education: Vec<JsonValue>,
    pub location: JsonValue,
    pub mobility: JsonValue,
    pub total_experience_years: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GenericOffer {
    pub offer_id: String,
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_min: u32,
    pub experience_max: Option<u32>,
    pub location: JsonValue,
    pub remote_policy: String,
}

/// Either native candidate shape an executor can receive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CandidatePayload {
    Nexten(NextenCandidate),
    Generic(GenericCandidate),
}

/// Either native offer shape an executor can receive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum OfferPayload {
    Nexten(NextenOffer),
    Generic(GenericOffer),
}

impl OfferPayload {
    pub fn offer_id(&self) -> &str {
        match self {
            OfferPayload::Nexten(o) => &o.offer_id,
            OfferPayload::Generic(o) => &o.offer_id,
        }
    }
}

/// Weighted scoring knobs carried alongside the payload. Defaults to
/// 0.4/0.3/0.2/0.1 (skills/experience/location/culture); NEXTEN additionally
/// carries a questionnaire weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AlgorithmConfig {
    pub skills_weight: f32,
    pub experience_weight: f32,
    pub location_weight: f32,
    pub culture_weight: f32,
    pub questionnaire_weight: Option<f32>,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            skills_weight: 0.4,
            experience_weight: 0.3,
            location_weight: 0.2,
            culture_weight: 0.1,
            questionnaire_weight: None,
        }
    }
}

impl AlgorithmConfig {
    pub fn with_questionnaire_weight(weight: f32) -> Self {
        Self {
            questionnaire_weight: Some(weight),
            ..Default::default()
        }
    }
}

/// One native result as returned by an executor, before normalization.
/// Unknown/extra fields an executor emits are preserved under `metadata`
/// rather than dropped (§9 "dynamic maps in native payloads" design note).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NativeResult {
    pub offer_id: String,
    pub score: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub category_scores: Option<NativeCategoryScores>,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub metadata: JsonMap<String, JsonValue>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NativeCategoryScores {
    pub skills: Option<f32>,
    pub experience: Option<f32>,
    pub location: Option<f32>,
    pub culture: Option<f32>,
    pub questionnaire: Option<f32>,
}
