//! Small LRU cache keyed by a fingerprint of (candidate identity, sorted
//! offer ids, algorithm hint), mirroring the model-handle cache pattern used
//! elsewhere in this codebase but over context analysis results rather than
//! loaded models.
use std::num::NonZeroUsize;

use domain::{AlgorithmChoice, CandidateProfile, Context, Offer};
use lru::LruCache;
use parking_lot::Mutex;
use xxhash_rust::xxh3::Xxh3;

const DEFAULT_CAPACITY: usize = 256;

/// A stable hash of the inputs that determine a `Context`. Not cryptographic;
/// collisions are acceptable since the cache is non-authoritative.
pub fn fingerprint(candidate: &CandidateProfile, offers: &[Offer], algorithm: AlgorithmChoice) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(candidate.id.as_bytes());

    let mut offer_ids: Vec<&str> = offers.iter().map(|o| o.id.as_str()).collect();
    offer_ids.sort_unstable();
    for id in offer_ids {
        hasher.update(id.as_bytes());
    }

    let algo_tag = match algorithm {
        AlgorithmChoice::Auto => "auto".to_string(),
        AlgorithmChoice::Manual(id) => id.as_str().to_string(),
    };
    hasher.update(algo_tag.as_bytes());

    hasher.digest()
}

pub struct ContextCache {
    inner: Mutex<LruCache<u64, Context>>,
}

impl ContextCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is non-zero");
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: u64) -> Option<Context> {
        self.inner.lock().get(&key).cloned()
    }

    pub fn put(&self, key: u64, context: Context) {
        self.inner.lock().put(key, context);
    }
}

impl Default for ContextCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ExperienceBand, Location, RemotePolicy};

    fn candidate(id: &str) -> CandidateProfile {
        CandidateProfile {
            id: id.into(),
            name: None,
            skills: vec![],
            experiences: vec![],
            education: vec![],
            certifications: vec![],
            projects: vec![],
            location: Location::default(),
            preferences: None,
        }
    }

    fn offer(id: &str) -> Offer {
        Offer {
            id: id.into(),
            title: "t".into(),
            company: None,
            required_skills: vec![],
            preferred_skills: vec![],
            experience: ExperienceBand { min: 0, max: None },
            location: Location::default(),
            remote_policy: RemotePolicy::Office,
            salary: None,
            company_questionnaire: None,
            commute_km: None,
        }
    }

    #[test]
    fn fingerprint_is_stable_regardless_of_offer_order() {
        let c = candidate("c1");
        let offers_a = vec![offer("o1"), offer("o2")];
        let offers_b = vec![offer("o2"), offer("o1")];
        assert_eq!(
            fingerprint(&c, &offers_a, AlgorithmChoice::Auto),
            fingerprint(&c, &offers_b, AlgorithmChoice::Auto)
        );
    }

    #[test]
    fn cache_roundtrips_a_stored_context() {
        let cache = ContextCache::new(2);
        let ctx = Context::empty_offers(false, 0);
        cache.put(42, ctx.clone());
        assert_eq!(cache.get(42), Some(ctx));
        assert_eq!(cache.get(7), None);
    }
}
