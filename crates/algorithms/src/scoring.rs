//! Deterministic weighted-sum scoring shared by the five stub executors.
//! Real recency decay / Dirichlet sampling is out of scope (spec §9) — this
//! is a fixed, reproducible stand-in so the orchestrator is exercisable
//! end-to-end without an external scoring service.
use adapter::{AlgorithmConfig, NativeCategoryScores, NativeResult};

use crate::features::{CandidateFeatures, OfferFeatures};

/// How strictly a candidate skill must match a required/preferred skill
/// name. `Substring` is the looser mode SEMANTIC uses to stand in for real
/// embedding similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillMatchMode {
    Exact,
    Substring,
}

fn skill_matches(candidate_skill: &str, target: &str, mode: SkillMatchMode) -> bool {
    match mode {
        SkillMatchMode::Exact => candidate_skill == target,
        SkillMatchMode::Substring => candidate_skill.contains(target) || target.contains(candidate_skill),
    }
}

fn skills_score(
    candidate: &CandidateFeatures,
    offer: &OfferFeatures,
    mode: SkillMatchMode,
) -> (f32, Vec<String>, Vec<String>) {
    if offer.required_skills.is_empty() && offer.preferred_skills.is_empty() {
        return (1.0, vec![], vec![]);
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for required in &offer.required_skills {
        if candidate.skills.iter().any(|s| skill_matches(s, required, mode)) {
            matched.push(required.clone());
        } else {
            missing.push(required.clone());
        }
    }
    let matched_preferred: Vec<&String> = offer
        .preferred_skills
        .iter()
        .filter(|p| candidate.skills.iter().any(|s| skill_matches(s, p, mode)))
        .collect();
    let preferred_hits = matched_preferred.len();
    matched.extend(matched_preferred.into_iter().cloned());

    let required_total = offer.required_skills.len().max(1) as f32;
    let required_ratio = (required_total - missing.len() as f32) / required_total;
    let preferred_bonus = if offer.preferred_skills.is_empty() {
        0.0
    } else {
        0.15 * (preferred_hits as f32 / offer.preferred_skills.len() as f32)
    };

    ((required_ratio + preferred_bonus).min(1.0), matched, missing)
}

fn experience_score(candidate: &CandidateFeatures, offer: &OfferFeatures) -> f32 {
    let years = candidate.total_experience_years;
    if years < offer.experience_min as f32 {
        let gap = offer.experience_min as f32 - years;
        return (1.0 - gap / offer.experience_min.max(1) as f32).max(0.0);
    }
    match offer.experience_max {
        Some(max) if years > max as f32 => {
            let over = years - max as f32;
            (1.0 - over / max.max(1) as f32 * 0.5).max(0.3)
        }
        _ => 1.0,
    }
}

fn location_score(candidate: &CandidateFeatures, offer: &OfferFeatures) -> f32 {
    match offer.remote_policy.as_str() {
        "remote" => 1.0,
        "hybrid" => {
            if candidate.remote_acceptable {
                0.9
            } else {
                0.7
            }
        }
        _ => {
            if candidate.remote_acceptable {
                0.5
            } else {
                0.8
            }
        }
    }
}

fn culture_score(candidate: &CandidateFeatures, offer: &OfferFeatures) -> Option<f32> {
    match (candidate.questionnaire_ratio, offer.questionnaire_ratio) {
        (Some(c), Some(o)) => Some(1.0 - (c - o).abs()),
        _ => None,
    }
}

/// Score one candidate/offer pair and produce the native result the
/// adapter's `normalize_result` will later translate back.
pub fn score_pair(
    offer_id: &str,
    candidate: &CandidateFeatures,
    offer: &OfferFeatures,
    config: &AlgorithmConfig,
    mode: SkillMatchMode,
) -> NativeResult {
    let (skills, matched, missing) = skills_score(candidate, offer, mode);
    let experience = experience_score(candidate, offer);
    let location = location_score(candidate, offer);
    let culture = culture_score(candidate, offer);

    let culture_weighted = culture.unwrap_or(0.6);
    let mut score = skills as f64 * config.skills_weight as f64
        + experience as f64 * config.experience_weight as f64
        + location as f64 * config.location_weight as f64
        + culture_weighted as f64 * config.culture_weight as f64;

    if let (Some(q_weight), Some(q_score)) = (config.questionnaire_weight, culture) {
        score += q_score as f64 * q_weight as f64;
    }

    NativeResult {
        offer_id: offer_id.to_string(),
        score,
        confidence: Some(0.7 + 0.3 * (matched.len().min(5) as f64 / 5.0)),
        category_scores: Some(NativeCategoryScores {
            skills: Some(skills),
            experience: Some(experience),
            location: Some(location),
            culture,
            questionnaire: culture,
        }),
        matched_skills: matched,
        missing_skills: missing,
        explanation: None,
        insights: vec![],
        metadata: Default::default(),
    }
}
