use serde::{Deserialize, Serialize};

use fallback::FallbackConfig;
use monitor::AlertThresholds;
use resilience::CircuitBreakerConfig;
use selector::SelectorConfig;

use crate::concurrency::ConcurrencyConfig;

/// All tunables for one `Orchestrator` instance, composed from each
/// component's own config type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    pub circuit_breaker: CircuitBreakerConfig,
    pub fallback: FallbackConfig,
    pub selector: SelectorConfig,
    pub alert_thresholds: AlertThresholds,
    pub context_cache_capacity: usize,
    pub concurrency: ConcurrencyConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            circuit_breaker: CircuitBreakerConfig::default(),
            fallback: FallbackConfig::default(),
            selector: SelectorConfig::default(),
            alert_thresholds: AlertThresholds::default(),
            context_cache_capacity: 256,
            concurrency: ConcurrencyConfig::default(),
        }
    }
}
