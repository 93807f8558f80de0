//! The Data Adapter: translates between the unified request/response shape
//! and each algorithm's native payload shape, and back.
//!
//! `adapt_request` is infallible — the domain layer has already validated
//! its inputs, so there is nothing left for this step to reject.
//! `normalize_result` is likewise infallible from the caller's perspective:
//! a translation failure for one offer degrades that one entry rather than
//! failing the whole request (§8's adapter round-trip law).
mod cache;
mod error;
mod generic;
mod nexten;
mod normalize;
mod types;

pub use cache::{AdapterCache, AdaptedPair};
pub use error::{AdapterError, AdapterResult};
pub use normalize::normalize_result;
pub use types::{
    AlgorithmConfig, CandidatePayload, GenericCandidate, GenericOffer, NativeCategoryScores,
    NativeResult, NextenCandidate, NextenCv, NextenOffer, OfferPayload,
};

use domain::{AlgorithmId, CandidateProfile, Offer, Questionnaire};

/// A candidate+offers pair already translated into one algorithm's native
/// shape, along with the weighted-scoring config to run it with.
pub struct AdaptedRequest {
    pub candidate: CandidatePayload,
    pub offers: Vec<OfferPayload>,
    pub config: AlgorithmConfig,
}

/// Translate the unified request into `algorithm`'s native payload shape.
/// NEXTEN gets the nested CV/questionnaire/preferences structure; every
/// other algorithm gets the flat generic structure.
pub fn adapt_request(
    algorithm: AlgorithmId,
    candidate: &CandidateProfile,
    questionnaire: Option<&Questionnaire>,
    offers: &[Offer],
) -> AdaptedRequest {
    match algorithm {
        AlgorithmId::Nexten => AdaptedRequest {
            candidate: CandidatePayload::Nexten(nexten::adapt_candidate(candidate, questionnaire)),
            offers: offers.iter().map(|o| OfferPayload::Nexten(nexten::adapt_offer(o))).collect(),
            config: nexten::config(0.1),
        },
        _ => AdaptedRequest {
            candidate: CandidatePayload::Generic(generic::adapt_candidate(candidate)),
            offers: offers.iter().map(|o| OfferPayload::Generic(generic::adapt_offer(o))).collect(),
            config: generic::config(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ExperienceBand, Location, RemotePolicy};

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: "c1".into(),
            name: None,
            skills: vec![],
            experiences: vec![],
            education: vec![],
            certifications: vec![],
            projects: vec![],
            location: Location::default(),
            preferences: None,
        }
    }

    fn offers() -> Vec<Offer> {
        vec![Offer {
            id: "o1".into(),
            title: "t".into(),
            company: None,
            required_skills: vec![],
            preferred_skills: vec![],
            experience: ExperienceBand { min: 0, max: None },
            location: Location::default(),
            remote_policy: RemotePolicy::Office,
            salary: None,
            company_questionnaire: None,
            commute_km: None,
        }]
    }

    #[test]
    fn nexten_gets_the_nested_shape() {
        let adapted = adapt_request(AlgorithmId::Nexten, &candidate(), None, &offers());
        assert!(matches!(adapted.candidate, CandidatePayload::Nexten(_)));
        assert!(matches!(adapted.offers[0], OfferPayload::Nexten(_)));
        assert_eq!(adapted.config.questionnaire_weight, Some(0.1));
    }

    #[test]
    fn other_algorithms_get_the_flat_shape() {
        for algorithm in [AlgorithmId::Smart, AlgorithmId::Enhanced, AlgorithmId::Semantic, AlgorithmId::Hybrid] {
            let adapted = adapt_request(algorithm, &candidate(), None, &offers());
            assert!(matches!(adapted.candidate, CandidatePayload::Generic(_)));
            assert_eq!(adapted.config.questionnaire_weight, None);
        }
    }
}
