use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExecutorError {
    #[error("algorithm '{0}' has no executor registered")]
    Unavailable(String),
    #[error("executor for '{0}' received a payload shape it does not support")]
    ShapeMismatch(String),
}

pub type ExecutorResult<T> = Result<T, ExecutorError>;
