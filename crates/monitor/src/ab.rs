//! Deterministic A/B traffic splitting and per-arm statistics.
use dashmap::DashMap;
use domain::AlgorithmId;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::stats::{AlgorithmSnapshot, AlgorithmStats};

/// A named experiment pitting two algorithms against each other on a
/// traffic split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbTest {
    pub name: String,
    pub arm_a: AlgorithmId,
    pub arm_b: AlgorithmId,
    /// Fraction of traffic routed to `arm_a`, in `[0, 1]`.
    pub split: f64,
}

/// `stable_hash(user_id) mod 100 / 100 < split → arm_a else arm_b`.
pub fn assign(test: &AbTest, user_id: &str) -> AlgorithmId {
    let hash = xxh3_64(user_id.as_bytes());
    let bucket = (hash % 100) as f64 / 100.0;
    if bucket < test.split {
        test.arm_a
    } else {
        test.arm_b
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbSignificanceSummary {
    pub test_name: String,
    pub arm_a: AlgorithmId,
    pub arm_b: AlgorithmId,
    pub arm_a_stats: AlgorithmSnapshot,
    pub arm_b_stats: AlgorithmSnapshot,
}

/// Per-(test, algorithm) statistics, queried for a significance summary.
#[derive(Default)]
pub struct AbStatsRegistry {
    stats: DashMap<(String, AlgorithmId), AlgorithmStats>,
}

impl AbStatsRegistry {
    pub fn record(
        &self,
        test_name: &str,
        algorithm: AlgorithmId,
        record: &crate::record::PerformanceRecord,
    ) {
        self.stats
            .entry((test_name.to_string(), algorithm))
            .or_default()
            .record(record);
    }

    pub fn clear(&self) {
        self.stats.clear();
    }

    pub fn summary(&self, test: &AbTest) -> AbSignificanceSummary {
        let arm_a_stats = self
            .stats
            .get(&(test.name.clone(), test.arm_a))
            .map(|s| s.snapshot())
            .unwrap_or_else(|| AlgorithmStats::default().snapshot());
        let arm_b_stats = self
            .stats
            .get(&(test.name.clone(), test.arm_b))
            .map(|s| s.snapshot())
            .unwrap_or_else(|| AlgorithmStats::default().snapshot());

        AbSignificanceSummary {
            test_name: test.name.clone(),
            arm_a: test.arm_a,
            arm_b: test.arm_b,
            arm_a_stats,
            arm_b_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_is_deterministic_for_the_same_user() {
        let test = AbTest {
            name: "t1".into(),
            arm_a: AlgorithmId::Nexten,
            arm_b: AlgorithmId::Smart,
            split: 0.5,
        };
        let first = assign(&test, "user-42");
        let second = assign(&test, "user-42");
        assert_eq!(first, second);
    }

    #[test]
    fn split_zero_always_assigns_b() {
        let test = AbTest {
            name: "t1".into(),
            arm_a: AlgorithmId::Nexten,
            arm_b: AlgorithmId::Smart,
            split: 0.0,
        };
        assert_eq!(assign(&test, "anyone"), AlgorithmId::Smart);
    }

    #[test]
    fn split_one_always_assigns_a() {
        let test = AbTest {
            name: "t1".into(),
            arm_a: AlgorithmId::Nexten,
            arm_b: AlgorithmId::Smart,
            split: 1.0,
        };
        assert_eq!(assign(&test, "anyone"), AlgorithmId::Nexten);
    }
}
