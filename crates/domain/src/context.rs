//! The derived, read-only [`Context`] record produced by the Context Analyzer.
use serde::{Deserialize, Serialize};

use crate::candidate::MobilityPreference;

/// Seniority band derived from total years of experience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    Junior,
    Mid,
    Senior,
    Expert,
}

impl SeniorityLevel {
    pub fn from_years(years: f32) -> Self {
        if years >= 10.0 {
            SeniorityLevel::Expert
        } else if years >= 5.0 {
            SeniorityLevel::Senior
        } else if years >= 2.0 {
            SeniorityLevel::Mid
        } else {
            SeniorityLevel::Junior
        }
    }

    pub fn is_senior_or_expert(&self) -> bool {
        matches!(self, SeniorityLevel::Senior | SeniorityLevel::Expert)
    }
}

/// Mirror of [`MobilityPreference`] at the Context level; kept as a distinct
/// type so the Context Analyzer can evolve its own derivation independent of
/// the raw candidate-stated preference.
pub type MobilityType = MobilityPreference;

/// High-level analysis strategy the rest of the pipeline should favor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Standard,
    SemanticPure,
    GeolocationFocused,
    ExperienceWeighted,
    HybridValidation,
}

/// The derived context record produced once per request.
///
/// Every field here is computed once per request by the context analyzer and
/// is treated as read-only by every downstream component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Context {
    pub data_completeness: f32,
    pub seniority_level: SeniorityLevel,
    pub mobility_type: MobilityType,
    pub skills_count: usize,
    pub geo_critical: bool,
    pub complexity_score: f32,
    pub requires_validation: bool,
    pub analysis_type: AnalysisType,

    // Intermediate facts the Selector's rule table reads directly; these are
    // not part of the headline summary but are genuinely part of the
    // "context" the rest of the pipeline reasons about.
    pub candidate_questionnaire_counted: bool,
    pub company_questionnaires_counted: bool,
    pub experience_years: f32,
    pub cv_completeness: f32,
    pub max_commute_km: Option<f32>,
    pub relocation_possible: bool,
    pub remote_acceptable: bool,
    pub offer_count: usize,
}

impl Context {
    /// Context for an empty offer list: `complexity_score = 0`, the caller
    /// decides what to do with an otherwise-normal context.
    pub fn empty_offers(candidate_questionnaire_counted: bool, skills_count: usize) -> Self {
        Self {
            data_completeness: 0.0,
            seniority_level: SeniorityLevel::Junior,
            mobility_type: MobilityType::default(),
            skills_count,
            geo_critical: false,
            complexity_score: 0.0,
            requires_validation: false,
            analysis_type: AnalysisType::Standard,
            candidate_questionnaire_counted,
            company_questionnaires_counted: false,
            experience_years: 0.0,
            cv_completeness: 0.0,
            max_commute_km: None,
            relocation_possible: true,
            remote_acceptable: false,
            offer_count: 0,
        }
    }
}
