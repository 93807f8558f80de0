//! Error types shared by every crate that speaks the domain's wire types.
use thiserror::Error;

/// Validation failures for the unified request/response shapes.
///
/// This is intentionally narrow: most error taxonomy lives closer to the
/// component that raises it (circuit breaker, fallback, adapter).
/// `DomainError` only covers malformed input that should never reach the
/// pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DomainError {
    #[error("candidate id must not be empty")]
    MissingCandidateId,
    #[error("score {0} is out of the [0,1] range or NaN")]
    InvalidScore(f32),
    #[error("confidence {0} is out of the [0,1] range or NaN")]
    InvalidConfidence(f32),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Clamp a score into `[0, 1]`, mapping NaN to `0.0`.
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
