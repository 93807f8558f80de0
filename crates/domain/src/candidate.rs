//! Candidate profile and questionnaire types.
use serde::{Deserialize, Serialize};
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

/// Self-reported or inferred seniority on a single skill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A single skill entry on a candidate profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
    #[serde(default)]
    pub years: Option<f32>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Skill {
    /// True when the skill's free-text name reads as a "complex" descriptor —
    /// long, or joined with list-like punctuation. Used by the Context
    /// Analyzer's profile-complexity term.
    pub fn is_complex_description(&self) -> bool {
        self.name.len() > 20 || self.name.chars().any(|c| matches!(c, ',' | '/' | '&' | '+'))
    }
}

/// A single past role on a candidate profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub months: u32,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
}

/// A single education entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
}

/// Candidate's mobility preference, used for geo-critical and analysis-type
/// derivation in the Context Analyzer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MobilityPreference {
    Local,
    #[default]
    Standard,
    Hybrid,
    Remote,
    Flexible,
}

/// Geographic location, shared by candidates and offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub coordinates: Option<(f64, f64)>,
}

/// Explicit mobility constraints the candidate has stated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MobilityPreferences {
    #[serde(default)]
    pub mobility: MobilityPreference,
    #[serde(default)]
    pub max_commute_km: Option<f32>,
    #[serde(default = "default_true")]
    pub relocation_possible: bool,
    #[serde(default)]
    pub remote_acceptable: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MobilityPreferences {
    fn default() -> Self {
        Self {
            mobility: MobilityPreference::default(),
            max_commute_km: None,
            relocation_possible: true,
            remote_acceptable: false,
        }
    }
}

/// Full candidate profile carried on a [`crate::MatchRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub preferences: Option<MobilityPreferences>,
}

impl CandidateProfile {
    /// Total declared years of experience, summed across entries.
    pub fn total_experience_years(&self) -> f32 {
        self.experiences.iter().map(|e| e.months as f32).sum::<f32>() / 12.0
    }

    pub fn mobility(&self) -> MobilityPreference {
        self.preferences
            .as_ref()
            .map(|p| p.mobility)
            .unwrap_or_default()
    }

    pub fn max_commute_km(&self) -> Option<f32> {
        self.preferences.as_ref().and_then(|p| p.max_commute_km)
    }

    pub fn relocation_possible(&self) -> bool {
        self.preferences
            .as_ref()
            .map(|p| p.relocation_possible)
            .unwrap_or(true)
    }

    pub fn remote_acceptable(&self) -> bool {
        self.preferences
            .as_ref()
            .map(|p| p.remote_acceptable)
            .unwrap_or(false)
    }
}

/// Opaque questionnaire payload: a flat map of question id to free-form
/// answer. Kept as a `serde_json::Map` rather than a typed schema since the
/// question set varies by company; the data adapter is the only layer
/// allowed to interpret specific keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Questionnaire {
    #[serde(flatten)]
    pub answers: JsonMap<String, JsonValue>,
}

impl Questionnaire {
    pub fn answered_count(&self) -> usize {
        self.answers
            .values()
            .filter(|v| !is_empty_answer(v))
            .count()
    }

    pub fn total_fields(&self) -> usize {
        self.answers.len()
    }

    /// Fraction of fields with a non-empty answer.
    pub fn non_empty_ratio(&self) -> f32 {
        if self.answers.is_empty() {
            return 0.0;
        }
        self.answered_count() as f32 / self.answers.len() as f32
    }

    /// Completion ratio used by the data-completeness rule: answered /
    /// total declared fields. Kept as a distinct accessor from
    /// `non_empty_ratio` even though they currently compute the same thing,
    /// since callers reason about them as separate thresholds.
    pub fn completion_ratio(&self) -> f32 {
        self.non_empty_ratio()
    }

    pub fn populated_field_count(&self) -> usize {
        self.answered_count()
    }
}

fn is_empty_answer(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.trim().is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn questionnaire(pairs: &[(&str, JsonValue)]) -> Questionnaire {
        let mut answers = JsonMap::new();
        for (k, v) in pairs {
            answers.insert(k.to_string(), v.clone());
        }
        Questionnaire { answers }
    }

    #[test]
    fn empty_questionnaire_has_zero_ratio() {
        let q = Questionnaire::default();
        assert_eq!(q.non_empty_ratio(), 0.0);
        assert_eq!(q.populated_field_count(), 0);
    }

    #[test]
    fn blank_and_null_answers_do_not_count() {
        let q = questionnaire(&[
            ("a", json!("  ")),
            ("b", json!(null)),
            ("c", json!("yes")),
            ("d", json!([])),
        ]);
        assert_eq!(q.answered_count(), 1);
        assert_eq!(q.non_empty_ratio(), 0.25);
    }

    #[test]
    fn complex_skill_description_detects_punctuation_and_length() {
        let long = Skill {
            name: "a".repeat(25),
            level: None,
            years: None,
            category: None,
        };
        assert!(long.is_complex_description());

        let punctuated = Skill {
            name: "Rust/Go".to_string(),
            level: None,
            years: None,
            category: None,
        };
        assert!(punctuated.is_complex_description());

        let simple = Skill {
            name: "Rust".to_string(),
            level: None,
            years: None,
            category: None,
        };
        assert!(!simple.is_complex_description());
    }
}
