//! NEXTEN's native payload shape: a deeply nested `{cv, questionnaire,
//! preferences}` candidate and a `{job_info, company_info, requirements,
//! questionnaire, conditions}` offer, mirroring the richer schema NEXTEN's
//! own scoring model expects.
use serde_json::{json, Map as JsonMap};

use domain::{CandidateProfile, Offer, Questionnaire};

use crate::types::{AlgorithmConfig, NextenCandidate, NextenCv, NextenOffer};

/// Build NEXTEN's nested candidate payload. Infallible: every field reads
/// from data the domain layer has already validated.
pub fn adapt_candidate(candidate: &CandidateProfile, questionnaire: Option<&Questionnaire>) -> NextenCandidate {
    let mut personal_info = JsonMap::new();
    personal_info.insert("id".into(), json!(candidate.id));
    if let Some(name) = &candidate.name {
        personal_info.insert("name".into(), json!(name));
    }
    personal_info.insert("location".into(), json!(candidate.location));

    let preferences = candidate
        .preferences
        .as_ref()
        .map(|p| {
            let mut map = JsonMap::new();
            map.insert("mobility".into(), json!(p.mobility));
            map.insert("max_commute_km".into(), json!(p.max_commute_km));
            map.insert("relocation_possible".into(), json!(p.relocation_possible));
            map.insert("remote_acceptable".into(), json!(p.remote_acceptable));
            map
        })
        .unwrap_or_default();

    NextenCandidate {
        cv: NextenCv {
            personal_info,
            experiences: candidate.experiences.iter().map(|e| json!(e)).collect(),
            skills: candidate.skills.iter().map(|s| json!(s)).collect(),
            education: candidate.education.iter().map(|e| json!(e)).collect(),
            certifications: candidate.certifications.iter().map(|c| json!(c)).collect(),
        },
        questionnaire: questionnaire
            .map(|q| q.answers.clone())
            .unwrap_or_default(),
        preferences,
    }
}

/// Build NEXTEN's nested offer payload.
pub fn adapt_offer(offer: &Offer) -> NextenOffer {
    let mut job_info = JsonMap::new();
    job_info.insert("title".into(), json!(offer.title));
    job_info.insert("remote_policy".into(), json!(offer.remote_policy));
    job_info.insert("location".into(), json!(offer.location));

    let mut company_info = JsonMap::new();
    company_info.insert("name".into(), json!(offer.company));
    if let Some(salary) = &offer.salary {
        company_info.insert("salary".into(), json!(salary));
    }

    let mut requirements = JsonMap::new();
    requirements.insert("required_skills".into(), json!(offer.required_skills));
    requirements.insert("preferred_skills".into(), json!(offer.preferred_skills));
    requirements.insert("experience".into(), json!(offer.experience));

    let mut conditions = JsonMap::new();
    conditions.insert("commute_km".into(), json!(offer.commute_km));

    NextenOffer {
        offer_id: offer.id.clone(),
        job_info,
        company_info,
        requirements,
        questionnaire: offer
            .company_questionnaire
            .as_ref()
            .map(|q| q.answers.clone())
            .unwrap_or_default(),
        conditions,
    }
}

pub fn config(questionnaire_weight: f32) -> AlgorithmConfig {
    AlgorithmConfig::with_questionnaire_weight(questionnaire_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Education, Experience, Location, MobilityPreferences, Skill};

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: "c1".into(),
            name: Some("Ada".into()),
            skills: vec![Skill {
                name: "Rust".into(),
                level: None,
                years: Some(3.0),
                category: None,
            }],
            experiences: vec![Experience {
                company: "Acme".into(),
                title: "Engineer".into(),
                months: 24,
                technologies: vec![],
                team_size: None,
            }],
            education: vec![Education {
                institution: "MIT".into(),
                degree: None,
                field: None,
                year: None,
            }],
            certifications: vec![],
            projects: vec![],
            location: Location::default(),
            preferences: Some(MobilityPreferences::default()),
        }
    }

    #[test]
    fn candidate_payload_carries_cv_sections() {
        let payload = adapt_candidate(&candidate(), None);
        assert_eq!(payload.cv.skills.len(), 1);
        assert_eq!(payload.cv.experiences.len(), 1);
        assert_eq!(payload.cv.education.len(), 1);
        assert_eq!(payload.preferences.get("relocation_possible"), Some(&json!(true)));
    }

    #[test]
    fn questionnaire_weight_defaults_distinguish_nexten_config() {
        let cfg = config(0.15);
        assert_eq!(cfg.questionnaire_weight, Some(0.15));
    }
}
