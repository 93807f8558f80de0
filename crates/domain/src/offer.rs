//! Job offer types.
use crate::candidate::{Location, Questionnaire};
use serde::{Deserialize, Serialize};

/// Remote-work policy attached to an offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemotePolicy {
    Office,
    Hybrid,
    Remote,
}

/// Minimum/maximum years of experience an offer is looking for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExperienceBand {
    pub min: u32,
    #[serde(default)]
    pub max: Option<u32>,
}

/// Optional compensation band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryBand {
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// A single job offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience: ExperienceBand,
    #[serde(default)]
    pub location: Location,
    pub remote_policy: RemotePolicy,
    #[serde(default)]
    pub salary: Option<SalaryBand>,
    #[serde(default)]
    pub company_questionnaire: Option<Questionnaire>,
    /// Commute distance required by this offer, when known. Drives the
    /// Context Analyzer's geo-critical rule (`max_commute_km < 25`,
    /// "proximity < 30km" share).
    #[serde(default)]
    pub commute_km: Option<f32>,
}

impl Offer {
    /// True when the offer pins the candidate to a specific place: not a
    /// fully remote role, and a location is actually specified.
    pub fn is_location_constrained(&self) -> bool {
        self.remote_policy != RemotePolicy::Remote
            && (self.location.city.is_some() || self.location.country.is_some())
    }

    /// True when the offer's company questionnaire "counts": at least 5
    /// populated fields.
    pub fn company_questionnaire_counts(&self) -> bool {
        self.company_questionnaire
            .as_ref()
            .map(|q| q.populated_field_count() >= 5)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_offer() -> Offer {
        Offer {
            id: "o1".into(),
            title: "Engineer".into(),
            company: None,
            required_skills: vec![],
            preferred_skills: vec![],
            experience: ExperienceBand { min: 0, max: None },
            location: Location::default(),
            remote_policy: RemotePolicy::Office,
            salary: None,
            company_questionnaire: None,
            commute_km: None,
        }
    }

    #[test]
    fn remote_offer_is_never_location_constrained() {
        let mut o = base_offer();
        o.remote_policy = RemotePolicy::Remote;
        o.location.city = Some("Paris".into());
        assert!(!o.is_location_constrained());
    }

    #[test]
    fn office_offer_without_location_is_not_constrained() {
        let o = base_offer();
        assert!(!o.is_location_constrained());
    }

    #[test]
    fn office_offer_with_location_is_constrained() {
        let mut o = base_offer();
        o.location.city = Some("Lyon".into());
        assert!(o.is_location_constrained());
    }
}
