//! Shared request/response/context types for the matching orchestration core.
//!
//! Every other crate in this workspace (`context`, `selector`, `adapter`,
//! `algorithms`, `fallback`, `monitor`, `orchestrator`, `api`) depends on
//! `domain` for the handful of types that flow through the whole pipeline:
//! the unified [`MatchRequest`]/[`MatchResponse`], the candidate/offer
//! profile types, the derived [`Context`], and the [`AlgorithmId`]
//! identifier. No business logic lives here — only the shapes.

pub mod algorithm;
pub mod candidate;
pub mod context;
pub mod error;
pub mod offer;
pub mod request;
pub mod result;
pub mod response;

pub use algorithm::{
    AlgorithmId, SelectionReason, LABEL_CRITICAL_FAILURE, LABEL_MINIMAL_FALLBACK, LABEL_NONE,
};
pub use candidate::{
    CandidateProfile, Education, Experience, Location, MobilityPreference, MobilityPreferences,
    Questionnaire, Skill, SkillLevel,
};
pub use context::{AnalysisType, Context, MobilityType, SeniorityLevel};
pub use error::{clamp_unit, DomainError, DomainResult};
pub use offer::{ExperienceBand, Offer, RemotePolicy, SalaryBand};
pub use request::{AlgorithmChoice, MatchRequest, RequestConfig};
pub use response::{MatchResponse, ResponseMetadata, ResponseStatus};
pub use result::{CategoryScores, MatchResult};
