use thiserror::Error;

use context::ContextError;
use domain::DomainError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrchestratorError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Context(#[from] ContextError),
    /// The blocking pipeline was abandoned before it finished: the caller
    /// disconnected, or the blocking task was aborted/panicked.
    #[error("request cancelled before the matching pipeline finished")]
    Cancelled,
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
