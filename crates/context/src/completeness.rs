//! Data-completeness and complexity scoring, split out from [`crate::analyzer`]
//! so each weighted formula can be unit-tested against hand-picked inputs.
use domain::{CandidateProfile, Offer, Questionnaire};

/// Candidate questionnaire counts when its completion ratio exceeds 0.8,
/// it has at least 10 answered items, and its non-empty answer ratio
/// exceeds 0.7.
pub fn candidate_questionnaire_counts(questionnaire: Option<&Questionnaire>) -> bool {
    match questionnaire {
        Some(q) => q.completion_ratio() > 0.8 && q.answered_count() >= 10 && q.non_empty_ratio() > 0.7,
        None => false,
    }
}

/// Share of offers whose company questionnaire has ≥5 populated fields.
pub fn company_questionnaire_ratio(offers: &[Offer]) -> f32 {
    if offers.is_empty() {
        return 0.0;
    }
    let counted = offers.iter().filter(|o| o.company_questionnaire_counts()).count();
    counted as f32 / offers.len() as f32
}

/// CV field coverage: average of `min(count/3, 1)` for list fields and
/// `min(keys/5, 1)` for map-shaped fields, across
/// {experience, skills, education, certifications, projects}.
pub fn cv_completeness(candidate: &CandidateProfile) -> f32 {
    let scores = [
        list_score(candidate.experiences.len()),
        list_score(candidate.skills.len()),
        list_score(candidate.education.len()),
        list_score(candidate.certifications.len()),
        list_score(candidate.projects.len()),
    ];
    scores.iter().sum::<f32>() / scores.len() as f32
}

fn list_score(count: usize) -> f32 {
    (count as f32 / 3.0).min(1.0)
}

/// Weighted combination: candidate questionnaire (0.4), company
/// questionnaires counted (0.3), CV completeness (0.3).
pub fn overall_data_completeness(
    candidate_questionnaire_counted: bool,
    company_questionnaires_counted: bool,
    cv_completeness: f32,
) -> f32 {
    let mut score = 0.0;
    if candidate_questionnaire_counted {
        score += 0.4;
    }
    if company_questionnaires_counted {
        score += 0.3;
    }
    score += 0.3 * cv_completeness;
    score
}

/// True if any of: >70% of offers are location-constrained, max commute
/// <25km, no relocation and no remote, or >60% of offers require proximity
/// under 30km.
pub fn geo_critical(
    offers: &[Offer],
    max_commute_km: Option<f32>,
    relocation_possible: bool,
    remote_acceptable: bool,
) -> bool {
    if offers.is_empty() {
        return false;
    }
    let constrained_ratio =
        offers.iter().filter(|o| o.is_location_constrained()).count() as f32 / offers.len() as f32;
    let proximity_ratio = offers
        .iter()
        .filter(|o| o.commute_km.map(|km| km < 30.0).unwrap_or(false))
        .count() as f32
        / offers.len() as f32;

    constrained_ratio > 0.7
        || max_commute_km.map(|km| km < 25.0).unwrap_or(false)
        || (!relocation_possible && !remote_acceptable)
        || proximity_ratio > 0.6
}

/// Weighted composite: completeness (0.25), profile complexity (0.30),
/// geo constraint (0.20), offer-list size (0.15), mobility complexity (0.10).
#[allow(clippy::too_many_arguments)]
pub fn complexity_score(
    data_completeness: f32,
    experience_years: f32,
    skills_count: usize,
    geo_constraint_score: f32,
    offer_count: usize,
    mobility_is_remote_or_hybrid: bool,
) -> f32 {
    let data_richness = (data_completeness * 1.2).min(1.0);
    let profile_complexity = ((experience_years / 15.0) + (skills_count as f32 / 25.0)).min(1.0);
    let volume_complexity = (offer_count as f32 / 100.0).min(1.0);
    let mobility_complexity = if mobility_is_remote_or_hybrid { 0.8 } else { 0.3 };

    data_richness * 0.25
        + profile_complexity * 0.30
        + geo_constraint_score * 0.20
        + volume_complexity * 0.15
        + mobility_complexity * 0.10
}

/// Normalized [0,1] constraint score used as the `geo_complexity` input to
/// [`complexity_score`]: distance factor, relocation/remote penalties, and
/// the share of offers that are location-constrained.
pub fn geo_constraint_score(
    offers: &[Offer],
    max_commute_km: Option<f32>,
    relocation_possible: bool,
    remote_acceptable: bool,
) -> f32 {
    let max_commute = max_commute_km.unwrap_or(50.0);
    let constrained_ratio = if offers.is_empty() {
        0.0
    } else {
        offers.iter().filter(|o| o.is_location_constrained()).count() as f32 / offers.len() as f32
    };

    let factors = [
        1.0 - (max_commute / 100.0).min(1.0),
        if !relocation_possible { 0.5 } else { 0.0 },
        if !remote_acceptable { 0.3 } else { 0.0 },
        constrained_ratio * 0.7,
    ];
    factors.iter().sum::<f32>() / factors.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ExperienceBand, Location, RemotePolicy};
    use serde_json::{json, Map};

    fn offer(constrained: bool, commute_km: Option<f32>) -> Offer {
        Offer {
            id: "o".into(),
            title: "t".into(),
            company: None,
            required_skills: vec![],
            preferred_skills: vec![],
            experience: ExperienceBand { min: 0, max: None },
            location: if constrained {
                Location {
                    city: Some("Paris".into()),
                    ..Default::default()
                }
            } else {
                Location::default()
            },
            remote_policy: if constrained {
                RemotePolicy::Office
            } else {
                RemotePolicy::Remote
            },
            salary: None,
            company_questionnaire: None,
            commute_km,
        }
    }

    #[test]
    fn candidate_questionnaire_needs_all_three_thresholds() {
        let mut answers = Map::new();
        for i in 0..10 {
            answers.insert(format!("q{i}"), json!("answer"));
        }
        let q = Questionnaire { answers };
        assert!(candidate_questionnaire_counts(Some(&q)));

        let mut sparse = Map::new();
        sparse.insert("q0".into(), json!("answer"));
        let q2 = Questionnaire { answers: sparse };
        assert!(!candidate_questionnaire_counts(Some(&q2)));
    }

    #[test]
    fn geo_critical_when_majority_of_offers_constrained() {
        let offers = vec![offer(true, None), offer(true, None), offer(false, None)];
        assert!(geo_critical(&offers, Some(50.0), true, true));
    }

    #[test]
    fn geo_critical_when_no_relocation_and_no_remote() {
        let offers = vec![offer(false, None)];
        assert!(geo_critical(&offers, Some(50.0), false, false));
    }

    #[test]
    fn geo_not_critical_for_flexible_candidate() {
        let offers = vec![offer(false, None)];
        assert!(!geo_critical(&offers, Some(50.0), true, true));
    }

    #[test]
    fn complexity_score_is_bounded() {
        let score = complexity_score(1.0, 20.0, 30, 1.0, 500, true);
        assert!(score <= 1.0);
        assert!(score > 0.0);
    }
}
