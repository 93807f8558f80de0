use thiserror::Error;

/// Per-item translation failures. These never propagate to the caller of
/// [`crate::normalize`] — a failed item becomes a degraded result and the
/// request continues, per the adapter's contract.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdapterError {
    #[error("native result is missing the required 'offer_id' field")]
    MissingOfferId,
    #[error("native result's score was not a finite number")]
    NonFiniteScore,
}

pub type AdapterResult<T> = Result<T, AdapterError>;
