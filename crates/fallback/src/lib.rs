//! The Fallback Manager: walks an algorithm's static fallback chain when
//! the orchestrator's primary circuit-breaker-gated call fails, and
//! synthesizes a degraded response when nothing in the chain works either.
mod chain;
mod config;
mod error;
mod minimal;

pub use chain::{execute_chain, FallbackOutcome};
pub use config::FallbackConfig;
pub use error::{FallbackError, FallbackResult};
pub use minimal::{critical_failure_response, minimal_response};

#[cfg(test)]
mod tests {
    use super::*;
    use algorithms::Registry;
    use domain::{CandidateProfile, ExperienceBand, Location, Offer, RemotePolicy};
    use resilience::{CircuitBreakerConfig, CircuitBreakerManager};
    use std::sync::Arc;

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
    fn disabled_fallback_goes_straight_to_critical_failure() {
        let registry = Registry::with_defaults();
        let circuits = Arc::new(CircuitBreakerManager::new(CircuitBreakerConfig::default()));
        let outcome = execute_chain(
            domain::AlgorithmId::Nexten,
            &candidate(),
            None,
            &offers(),
            &registry,
            &circuits,
            false,
            FallbackConfig::default(),
        );
        assert!(matches!(outcome, FallbackOutcome::CriticalFailure { .. }));
    }

    #[test]
    fn healthy_chain_entry_recovers() {
        let registry = Registry::with_defaults();
        let circuits = Arc::new(CircuitBreakerManager::new(CircuitBreakerConfig::default()));
        let outcome = execute_chain(
            domain::AlgorithmId::Nexten,
            &candidate(),
            None,
            &offers(),
            &registry,
            &circuits,
            true,
            FallbackConfig::default(),
        );
        match outcome {
            FallbackOutcome::Recovered { matches, fallback_algorithm } => {
                assert_eq!(fallback_algorithm, domain::AlgorithmId::Enhanced);
                assert_eq!(matches.len(), 1);
                assert_eq!(matches[0].is_fallback, Some(true));
            }
            other => panic!("expected recovery, got {other:?}"),
        }
    }

    #[test]
    fn fully_open_chain_synthesizes_minimal_response() {
        let registry = Registry::with_defaults();
        let circuits = Arc::new(CircuitBreakerManager::new(CircuitBreakerConfig::default()));
        for id in domain::AlgorithmId::ALL {
            circuits.force_open(id, "test");
        }
        let outcome = execute_chain(
            domain::AlgorithmId::Nexten,
            &candidate(),
            None,
            &offers(),
            &registry,
            &circuits,
            true,
            FallbackConfig::default(),
        );
        assert!(matches!(outcome, FallbackOutcome::Minimal { .. }));
    }
}
