//! The Algorithm Registry: the [`Executor`] trait every matching algorithm
//! implements, and the five in-tree stub executors behind it.
mod enhanced;
mod error;
mod executor;
mod features;
mod hybrid;
mod nexten;
mod registry;
mod scoring;
mod semantic;
mod smart;

pub use error::{ExecutorError, ExecutorResult};
pub use executor::Executor;
pub use registry::{Registry, UnavailableExecutor};

pub use enhanced::EnhancedExecutor;
pub use hybrid::HybridExecutor;
pub use nexten::NextenExecutor;
pub use semantic::SemanticExecutor;
pub use smart::SmartExecutor;
