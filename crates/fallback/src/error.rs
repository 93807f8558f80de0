use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FallbackError {
    #[error("every algorithm in the fallback chain was unavailable or failed")]
    ChainExhausted,
}

pub type FallbackResult<T> = Result<T, FallbackError>;
