//! Per-algorithm circuit breaking: availability gating, call timeouts, and
//! the latency/transition history the monitor and selector read from.
mod circuit_breaker;
mod error;
mod manager;
mod ring;

pub use circuit_breaker::{
    CircuitBreaker, CircuitBreakerConfig, CircuitStats, CircuitState, StateTransition,
};
pub use error::CircuitError;
pub use manager::CircuitBreakerManager;
pub use ring::Ring;
