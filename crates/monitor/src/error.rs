use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MonitorError {
    #[error("no A/B test registered under name '{0}'")]
    UnknownTest(String),
}

pub type MonitorResult<T> = Result<T, MonitorError>;
