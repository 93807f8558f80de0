//! Distills a [`domain::MatchRequest`] into a small, read-only [`domain::Context`]
//! record that the selector, adapter, and monitor all key their decisions on.
mod analyzer;
mod cache;
mod completeness;
mod error;

pub use analyzer::ContextAnalyzer;
pub use error::{ContextError, ContextResult};
