//! Pulls the handful of scalar features the stub executors actually score
//! on out of either native payload shape, so the five executors share one
//! extraction path regardless of whether they were handed NEXTEN's nested
//! payload or the flat generic one.
use adapter::{CandidatePayload, OfferPayload};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Default)]
pub struct CandidateFeatures {
    pub skills: Vec<String>,
    pub total_experience_years: f32,
    pub remote_acceptable: bool,
    /// Fraction of questionnaire fields answered, when the payload carries
    /// one (NEXTEN only). `None` means no culture signal is available.
    pub questionnaire_ratio: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct OfferFeatures {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_min: u32,
    pub experience_max: Option<u32>,
    pub remote_policy: String,
    pub questionnaire_ratio: Option<f32>,
}

fn skill_name(value: &JsonValue) -> Option<String> {
    value
        .get("name")
        .and_then(JsonValue::as_str)
        .map(str::to_lowercase)
}

fn questionnaire_ratio(map: &serde_json::Map<String, JsonValue>) -> Option<f32> {
    if map.is_empty() {
        return None;
    }
    let answered = map
        .values()
        .filter(|v| !matches!(v, JsonValue::Null) && *v != &JsonValue::String(String::new()))
        .count();
    Some(answered as f32 / map.len() as f32)
}

pub fn extract_candidate(payload: &CandidatePayload) -> CandidateFeatures {
    match payload {
        CandidatePayload::Nexten(c) => CandidateFeatures {
            skills: c.cv.skills.iter().filter_map(skill_name).collect(),
            total_experience_years: c.cv.experiences.len() as f32,
            remote_acceptable: c
                .preferences
                .get("remote_acceptable")
                .and_then(JsonValue::as_bool)
                .unwrap_or(false),
            questionnaire_ratio: questionnaire_ratio(&c.questionnaire),
        },
        CandidatePayload::Generic(c) => CandidateFeatures {
            skills: c.skills.iter().filter_map(skill_name).collect(),
            total_experience_years: c.total_experience_years,
            remote_acceptable: c
                .mobility
                .as_str()
                .map(|m| m == "remote" || m == "flexible")
                .unwrap_or(false),
            questionnaire_ratio: None,
        },
    }
}

pub fn extract_offer(payload: &OfferPayload) -> OfferFeatures {
    match payload {
        OfferPayload::Nexten(o) => {
            let required_skills = o
                .requirements
                .get("required_skills")
                .and_then(JsonValue::as_array)
                .map(|a| a.iter().filter_map(|v| v.as_str().map(str::to_lowercase)).collect())
                .unwrap_or_default();
            let preferred_skills = o
                .requirements
                .get("preferred_skills")
                .and_then(JsonValue::as_array)
                .map(|a| a.iter().filter_map(|v| v.as_str().map(str::to_lowercase)).collect())
                .unwrap_or_default();
            let experience_min = o
                .requirements
                .get("experience")
                .and_then(|e| e.get("min"))
                .and_then(JsonValue::as_u64)
                .unwrap_or(0) as u32;
            let experience_max = o
                .requirements
                .get("experience")
                .and_then(|e| e.get("max"))
                .and_then(JsonValue::as_u64)
                .map(|v| v as u32);
            let remote_policy = o
                .job_info
                .get("remote_policy")
                .and_then(JsonValue::as_str)
                .unwrap_or("office")
                .to_string();
            OfferFeatures {
                required_skills,
                preferred_skills,
                experience_min,
                experience_max,
                remote_policy,
                questionnaire_ratio: questionnaire_ratio(&o.questionnaire),
            }
        }
        OfferPayload::Generic(o) => OfferFeatures {
            required_skills: o.required_skills.iter().map(|s| s.to_lowercase()).collect(),
            preferred_skills: o.preferred_skills.iter().map(|s| s.to_lowercase()).collect(),
            experience_min: o.experience_min,
            experience_max: o.experience_max,
            remote_policy: o.remote_policy.clone(),
            questionnaire_ratio: None,
        },
    }
}
