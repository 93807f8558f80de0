//! Errors raised by a single [`crate::CircuitBreaker::call`] invocation.
use thiserror::Error;

/// Outcome of a rejected or failed call through the breaker.
///
/// `Open` and `Timeout` carry no payload from the wrapped operation; `Failed`
/// re-raises whatever the wrapped closure returned.
#[derive(Debug, Error)]
pub enum CircuitError<E> {
    #[error("circuit is open, rejecting call before execution")]
    Open,
    #[error("call exceeded the configured timeout")]
    Timeout,
    #[error("call failed: {0}")]
    Failed(E),
}

impl<E> CircuitError<E> {
    pub fn is_open(&self) -> bool {
        matches!(self, CircuitError::Open)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, CircuitError::Timeout)
    }
}
