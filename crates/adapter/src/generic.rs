//! The flat native payload shape shared by SMART, ENHANCED, SEMANTIC and
//! HYBRID — these four algorithms don't need NEXTEN's nested CV sections, so
//! the adapter maps the unified candidate/offer onto them field-for-field.
use serde_json::json;

use domain::{CandidateProfile, Offer};

use crate::types::{AlgorithmConfig, GenericCandidate, GenericOffer};

pub fn adapt_candidate(candidate: &CandidateProfile) -> GenericCandidate {
    GenericCandidate {
        id: candidate.id.clone(),
        skills: candidate.skills.iter().map(|s| json!(s)).collect(),
        experiences: candidate.experiences.iter().map(|e| json!(e)).collect(),
        education: candidate.education.iter().map(|e| json!(e)).collect(),
        location: json!(candidate.location),
        mobility: json!(candidate.mobility()),
        total_experience_years: candidate.total_experience_years(),
    }
}

pub fn adapt_offer(offer: &Offer) -> GenericOffer {
    GenericOffer {
        offer_id: offer.id.clone(),
        title: offer.title.clone(),
        required_skills: offer.required_skills.clone(),
        preferred_skills: offer.preferred_skills.clone(),
        experience_min: offer.experience.min,
        experience_max: offer.experience.max,
        location: json!(offer.location),
        remote_policy: json!(offer.remote_policy).as_str().unwrap_or("office").to_string(),
    }
}

pub fn config() -> AlgorithmConfig {
    AlgorithmConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ExperienceBand, Location, RemotePolicy};

    fn offer() -> Offer {
        Offer {
            id: "o1".into(),
            title: "Engineer".into(),
            company: None,
            required_skills: vec!["rust".into()],
            preferred_skills: vec![],
            experience: ExperienceBand { min: 2, max: Some(5) },
            location: Location::default(),
            remote_policy: RemotePolicy::Hybrid,
            salary: None,
            company_questionnaire: None,
            commute_km: None,
        }
    }

    #[test]
    fn offer_payload_maps_fields_one_to_one() {
        let payload = adapt_offer(&offer());
        assert_eq!(payload.offer_id, "o1");
        assert_eq!(payload.experience_min, 2);
        assert_eq!(payload.experience_max, Some(5));
        assert_eq!(payload.remote_policy, "hybrid");
    }

    #[test]
    fn default_config_matches_spec_weights() {
        let cfg = config();
        assert_eq!(cfg.skills_weight, 0.4);
        assert_eq!(cfg.questionnaire_weight, None);
    }
}
