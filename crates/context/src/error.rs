use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContextError {
    #[error("candidate identity is required for context analysis")]
    MissingCandidateIdentity,
}

pub type ContextResult<T> = Result<T, ContextError>;
