//! Pure `(Context, Config) -> (AlgorithmId, SelectionReason)` rule table.
//!
//! Rule order is significant: the first matching rule wins. This module has
//! no dependency on circuit breakers or performance stats — that lives in
//! [`crate::degradation`], which runs after this picks a candidate.
use domain::{AlgorithmId, AnalysisType, Context, SeniorityLevel, SelectionReason};

/// First-match-wins rule table, excluding the manual-override short-circuit
/// (the caller checks `request_config.algorithm` before reaching here).
pub fn decide(context: &Context) -> (AlgorithmId, SelectionReason) {
    if nexten_applies(context) {
        return (AlgorithmId::Nexten, SelectionReason::CompleteData);
    }
    if smart_applies(context) {
        return (AlgorithmId::Smart, SelectionReason::GeoCritical);
    }
    if enhanced_applies(context) {
        return (AlgorithmId::Enhanced, SelectionReason::SeniorNoQuestionnaire);
    }
    if semantic_applies(context) {
        return (AlgorithmId::Semantic, SelectionReason::HighSkills);
    }
    if hybrid_applies(context, /* performance_mode */ false) {
        return (AlgorithmId::Hybrid, SelectionReason::ValidationRequired);
    }
    (AlgorithmId::Nexten, SelectionReason::Default)
}

/// Same rule table, but threading through the request's `performance_mode`
/// flag which rule 5's last clause reads ("non-performance mode and
/// complexity_score > 0.7").
pub fn decide_with_performance_mode(
    context: &Context,
    performance_mode: bool,
) -> (AlgorithmId, SelectionReason) {
    if nexten_applies(context) {
        return (AlgorithmId::Nexten, SelectionReason::CompleteData);
    }
    if smart_applies(context) {
        return (AlgorithmId::Smart, SelectionReason::GeoCritical);
    }
    if enhanced_applies(context) {
        return (AlgorithmId::Enhanced, SelectionReason::SeniorNoQuestionnaire);
    }
    if semantic_applies(context) {
        return (AlgorithmId::Semantic, SelectionReason::HighSkills);
    }
    if hybrid_applies(context, performance_mode) {
        return (AlgorithmId::Hybrid, SelectionReason::ValidationRequired);
    }
    (AlgorithmId::Nexten, SelectionReason::Default)
}

fn nexten_applies(context: &Context) -> bool {
    context.candidate_questionnaire_counted
        && context.company_questionnaires_counted
        && context.data_completeness > 0.7
        && context.skills_count >= 5
}

fn smart_applies(context: &Context) -> bool {
    context.geo_critical
        || matches!(
            context.mobility_type,
            domain::MobilityPreference::Remote
                | domain::MobilityPreference::Hybrid
                | domain::MobilityPreference::Flexible
        )
        || context.max_commute_km.map(|km| km < 25.0).unwrap_or(false)
        || !context.relocation_possible
}

fn enhanced_applies(context: &Context) -> bool {
    context.experience_years >= 7.0
        && !context.candidate_questionnaire_counted
        && context.cv_completeness > 0.6
        && context.seniority_level.is_senior_or_expert()
}

fn semantic_applies(context: &Context) -> bool {
    context.analysis_type == AnalysisType::SemanticPure
        || context.skills_count >= 20
        || (context.seniority_level.is_senior_or_expert()
            && context.cv_completeness > 0.8
            && !context.candidate_questionnaire_counted)
}

fn hybrid_applies(context: &Context, performance_mode: bool) -> bool {
    context.requires_validation
        || context.complexity_score > 0.9
        || (context.seniority_level == SeniorityLevel::Expert
            && context.data_completeness > 0.4
            && context.data_completeness < 0.8)
        || (!performance_mode && context.complexity_score > 0.7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::MobilityPreference;

    fn base_context() -> Context {
        Context {
            data_completeness: 0.0,
            seniority_level: SeniorityLevel::Junior,
            mobility_type: MobilityPreference::Standard,
            skills_count: 1,
            geo_critical: false,
            complexity_score: 0.0,
            requires_validation: false,
            analysis_type: AnalysisType::Standard,
            candidate_questionnaire_counted: false,
            company_questionnaires_counted: false,
            experience_years: 0.0,
            cv_completeness: 0.0,
            max_commute_km: None,
            relocation_possible: true,
            remote_acceptable: false,
            offer_count: 1,
        }
    }

    #[test]
    fn nexten_requires_strictly_greater_than_0_7() {
        let mut ctx = base_context();
        ctx.candidate_questionnaire_counted = true;
        ctx.company_questionnaires_counted = true;
        ctx.skills_count = 8;
        ctx.data_completeness = 0.7;
        assert_ne!(decide(&ctx).0, AlgorithmId::Nexten);

        ctx.data_completeness = 0.71;
        assert_eq!(decide(&ctx), (AlgorithmId::Nexten, SelectionReason::CompleteData));
    }

    #[test]
    fn geo_critical_selects_smart_before_nexten_conditions_are_checked() {
        let mut ctx = base_context();
        ctx.candidate_questionnaire_counted = true;
        ctx.company_questionnaires_counted = true;
        ctx.skills_count = 8;
        ctx.data_completeness = 0.9;
        ctx.geo_critical = true;
        assert_eq!(decide(&ctx), (AlgorithmId::Smart, SelectionReason::GeoCritical));
    }

    #[test]
    fn enhanced_requires_no_questionnaire_and_senior_plus() {
        let mut ctx = base_context();
        ctx.experience_years = 8.0;
        ctx.cv_completeness = 0.7;
        ctx.seniority_level = SeniorityLevel::Senior;
        assert_eq!(
            decide(&ctx),
            (AlgorithmId::Enhanced, SelectionReason::SeniorNoQuestionnaire)
        );
    }

    #[test]
    fn semantic_pure_analysis_type_selects_semantic() {
        let mut ctx = base_context();
        ctx.analysis_type = AnalysisType::SemanticPure;
        assert_eq!(decide(&ctx), (AlgorithmId::Semantic, SelectionReason::HighSkills));
    }

    #[test]
    fn hybrid_on_requires_validation() {
        let mut ctx = base_context();
        ctx.requires_validation = true;
        assert_eq!(
            decide(&ctx),
            (AlgorithmId::Hybrid, SelectionReason::ValidationRequired)
        );
    }

    #[test]
    fn performance_mode_suppresses_the_complexity_only_hybrid_clause() {
        let mut ctx = base_context();
        ctx.complexity_score = 0.75;
        assert_eq!(
            decide_with_performance_mode(&ctx, true),
            (AlgorithmId::Nexten, SelectionReason::Default)
        );
        assert_eq!(
            decide_with_performance_mode(&ctx, false),
            (AlgorithmId::Hybrid, SelectionReason::ValidationRequired)
        );
    }

    #[test]
    fn default_falls_back_to_nexten() {
        let ctx = base_context();
        assert_eq!(decide(&ctx), (AlgorithmId::Nexten, SelectionReason::Default));
    }
}
