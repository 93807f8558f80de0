//! Workspace umbrella crate for SuperMatch, the matching orchestration core.
//!
//! `supermatch` re-exports the context, selector, adapter, algorithms,
//! resilience, fallback, monitor, and orchestrator crates so applications
//! can drive the full request lifecycle through a single dependency. The
//! one entry point most callers need is [`Orchestrator::process`]; the
//! `server` crate builds the HTTP surface on top of it (see the
//! `supermatch-server` binary).
//!
//! ## Quick start
//!
//! ```
//! use supermatch::{CoreConfig, Orchestrator};
//! use supermatch::domain::{CandidateProfile, Location, MatchRequest, RequestConfig};
//!
//! let orchestrator = Orchestrator::new(CoreConfig::default());
//! let request = MatchRequest {
//!     candidate: CandidateProfile {
//!         id: "cand-1".into(),
//!         name: None,
//!         skills: vec![],
//!         experiences: vec![],
//!         education: vec![],
//!         certifications: vec![],
//!         projects: vec![],
//!         location: Location::default(),
//!         preferences: None,
//!     },
//!     candidate_questionnaire: None,
//!     offers: vec![],
//!     config: RequestConfig::default(),
//! };
//!
//! let response = orchestrator.process("req-1".into(), &request).unwrap();
//! assert!(response.matches.is_empty());
//! ```

pub use adapter;
pub use algorithms;
pub use context;
pub use domain;
pub use fallback;
pub use monitor;
pub use orchestrator;
pub use resilience;
pub use selector;

pub use domain::{AlgorithmId, Context, MatchRequest, MatchResponse, MatchResult};
pub use orchestrator::{CoreConfig, Orchestrator, OrchestratorError, OrchestratorResult};

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{CandidateProfile, Location, RequestConfig};

    #[test]
    fn empty_offer_list_yields_empty_ok_response() {
        let orchestrator = Orchestrator::new(CoreConfig::default());
        let request = MatchRequest {
            candidate: CandidateProfile {
                id: "cand-1".into(),
                name: None,
                skills: vec![],
                experiences: vec![],
                education: vec![],
                certifications: vec![],
                projects: vec![],
                location: Location::default(),
                preferences: None,
            },
            candidate_questionnaire: None,
            offers: vec![],
            config: RequestConfig::default(),
        };

        let response = orchestrator.process("req-1".into(), &request).unwrap();
        assert!(response.matches.is_empty());
        assert_eq!(response.status, domain::ResponseStatus::Ok);
    }
}
