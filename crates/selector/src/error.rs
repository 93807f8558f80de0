use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectorError {
    #[error("selector config has an out-of-range threshold: {0}")]
    InvalidConfig(String),
}

pub type SelectorResult<T> = Result<T, SelectorError>;
