//! Distills a match request into a [`Context`] record the rest of the
//! pipeline treats as read-only.
use domain::{AnalysisType, CandidateProfile, Context, MatchRequest, SeniorityLevel};

use crate::cache::{fingerprint, ContextCache};
use crate::completeness::{
    candidate_questionnaire_counts, company_questionnaire_ratio, complexity_score, cv_completeness,
    geo_constraint_score, geo_critical, overall_data_completeness,
};
use crate::error::{ContextError, ContextResult};

pub struct ContextAnalyzer {
    cache: ContextCache,
}

impl Default for ContextAnalyzer {
    fn default() -> Self {
        Self::new(256)
    }
}

impl ContextAnalyzer {
    pub fn new(cache_capacity: usize) -> Self {
        Self {
            cache: ContextCache::new(cache_capacity),
        }
    }

    /// Pure given inputs; no I/O beyond the in-process cache lookup.
    /// Complexity is O(n_offers + n_skills).
    pub fn analyze(&self, request: &MatchRequest) -> ContextResult<Context> {
        if request.candidate.id.trim().is_empty() {
            return Err(ContextError::MissingCandidateIdentity);
        }

        let key = fingerprint(&request.candidate, &request.offers, request.config.algorithm);
        if let Some(cached) = self.cache.get(key) {
            tracing::debug!(candidate_id = %request.candidate.id, "context cache hit");
            return Ok(cached);
        }

        let context = self.compute(request);
        self.cache.put(key, context.clone());
        Ok(context)
    }

    fn compute(&self, request: &MatchRequest) -> Context {
        let candidate = &request.candidate;
        let offers = &request.offers;

        if offers.is_empty() {
            let counted = candidate_questionnaire_counts(request.candidate_questionnaire.as_ref());
            return Context::empty_offers(counted, skills_count(candidate));
        }

        let candidate_questionnaire_counted =
            candidate_questionnaire_counts(request.candidate_questionnaire.as_ref());
        let company_ratio = company_questionnaire_ratio(offers);
        let company_questionnaires_counted = company_ratio > 0.4;
        let cv = cv_completeness(candidate);
        let data_completeness =
            overall_data_completeness(candidate_questionnaire_counted, company_questionnaires_counted, cv);

        let experience_years = candidate.total_experience_years();
        let seniority_level = SeniorityLevel::from_years(experience_years);
        let mobility_type = candidate.mobility();
        let max_commute_km = candidate.max_commute_km();
        let relocation_possible = candidate.relocation_possible();
        let remote_acceptable = candidate.remote_acceptable();
        let skills = skills_count(candidate);

        let geo_critical = geo_critical(offers, max_commute_km, relocation_possible, remote_acceptable);
        let geo_score = geo_constraint_score(offers, max_commute_km, relocation_possible, remote_acceptable);
        let mobility_is_remote_or_hybrid = matches!(
            mobility_type,
            domain::MobilityPreference::Remote | domain::MobilityPreference::Hybrid
        );

        let complexity = complexity_score(
            data_completeness,
            experience_years,
            skills,
            geo_score,
            offers.len(),
            mobility_is_remote_or_hybrid,
        );

        let analysis_type = determine_analysis_type(skills, geo_critical, experience_years, complexity);

        let requires_validation = complexity > 0.9
            || (seniority_level == SeniorityLevel::Expert && data_completeness > 0.4 && data_completeness < 0.8)
            || request.config.require_validation;

        Context {
            data_completeness,
            seniority_level,
            mobility_type,
            skills_count: skills,
            geo_critical,
            complexity_score: complexity,
            requires_validation,
            analysis_type,
            candidate_questionnaire_counted,
            company_questionnaires_counted,
            experience_years,
            cv_completeness: cv,
            max_commute_km,
            relocation_possible,
            remote_acceptable,
            offer_count: offers.len(),
        }
    }
}

fn skills_count(candidate: &CandidateProfile) -> usize {
    candidate.skills.len().max(
        candidate
            .experiences
            .iter()
            .flat_map(|e| e.technologies.iter())
            .collect::<std::collections::HashSet<_>>()
            .len(),
    )
}

/// First match wins: skills_count≥20 → semantic_pure; geo_critical →
/// geolocation_focused; experience_years≥7 → experience_weighted;
/// complexity_score>0.8 → hybrid_validation; else standard.
fn determine_analysis_type(
    skills_count: usize,
    geo_critical: bool,
    experience_years: f32,
    complexity_score: f32,
) -> AnalysisType {
    if skills_count >= 20 {
        AnalysisType::SemanticPure
    } else if geo_critical {
        AnalysisType::GeolocationFocused
    } else if experience_years >= 7.0 {
        AnalysisType::ExperienceWeighted
    } else if complexity_score > 0.8 {
        AnalysisType::HybridValidation
    } else {
        AnalysisType::Standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Experience, ExperienceBand, Location, Offer, RemotePolicy, RequestConfig, Skill, SkillLevel};

    fn candidate_with(years: u32, skills: usize) -> CandidateProfile {
        CandidateProfile {
            id: "c1".into(),
            name: None,
            skills: (0..skills)
                .map(|i| Skill {
                    name: format!("skill-{i}"),
                    level: Some(SkillLevel::Advanced),
                    years: Some(2.0),
                    category: None,
                })
                .collect(),
            experiences: vec![Experience {
                company: "acme".into(),
                title: "engineer".into(),
                months: years * 12,
                technologies: vec![],
                team_size: None,
            }],
            education: vec![],
            certifications: vec![],
            projects: vec![],
            location: Location::default(),
            preferences: None,
        }
    }

    fn offer(id: &str) -> Offer {
        Offer {
            id: id.into(),
            title: "t".into(),
            company: None,
            required_skills: vec![],
            preferred_skills: vec![],
            experience: ExperienceBand { min: 0, max: None },
            location: Location::default(),
            remote_policy: RemotePolicy::Remote,
            salary: None,
            company_questionnaire: None,
            commute_km: None,
        }
    }

    #[test]
    fn rejects_missing_candidate_id() {
        let mut request = MatchRequest {
            candidate: candidate_with(1, 1),
            candidate_questionnaire: None,
            offers: vec![offer("o1")],
            config: RequestConfig::default(),
        };
        request.candidate.id = "   ".into();
        let analyzer = ContextAnalyzer::default();
        assert_eq!(
            analyzer.analyze(&request).unwrap_err(),
            ContextError::MissingCandidateIdentity
        );
    }

    #[test]
    fn empty_offers_yields_zero_complexity() {
        let request = MatchRequest {
            candidate: candidate_with(1, 1),
            candidate_questionnaire: None,
            offers: vec![],
            config: RequestConfig::default(),
        };
        let analyzer = ContextAnalyzer::default();
        let ctx = analyzer.analyze(&request).unwrap();
        assert_eq!(ctx.complexity_score, 0.0);
        assert_eq!(ctx.offer_count, 0);
    }

    #[test]
    fn high_skill_count_selects_semantic_pure_analysis() {
        let request = MatchRequest {
            candidate: candidate_with(3, 25),
            candidate_questionnaire: None,
            offers: vec![offer("o1")],
            config: RequestConfig::default(),
        };
        let analyzer = ContextAnalyzer::default();
        let ctx = analyzer.analyze(&request).unwrap();
        assert_eq!(ctx.analysis_type, AnalysisType::SemanticPure);
    }

    #[test]
    fn repeated_requests_hit_the_cache() {
        let request = MatchRequest {
            candidate: candidate_with(2, 3),
            candidate_questionnaire: None,
            offers: vec![offer("o1")],
            config: RequestConfig::default(),
        };
        let analyzer = ContextAnalyzer::default();
        let first = analyzer.analyze(&request).unwrap();
        let second = analyzer.analyze(&request).unwrap();
        assert_eq!(first, second);
    }
}
