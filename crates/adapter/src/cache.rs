//! Bounded LRU cache of already-adapted native payloads, keyed by the same
//! kind of fingerprint as [`context::cache`], so repeat requests for the
//! same candidate/offer/algorithm triple skip re-translation.
use std::num::NonZeroUsize;

use domain::{AlgorithmId, CandidateProfile, Offer};
use lru::LruCache;
use parking_lot::Mutex;
use xxhash_rust::xxh3::Xxh3;

use crate::types::{CandidatePayload, OfferPayload};

const DEFAULT_CAPACITY: usize = 1000;

pub fn fingerprint(candidate: &CandidateProfile, offer: &Offer, algorithm: AlgorithmId) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(candidate.id.as_bytes());
    hasher.update(offer.id.as_bytes());
    hasher.update(algorithm.as_str().as_bytes());
    hasher.digest()
}

#[derive(Clone)]
pub struct AdaptedPair {
    pub candidate: CandidatePayload,
    pub offer: OfferPayload,
}

pub struct AdapterCache {
    inner: Mutex<LruCache<u64, AdaptedPair>>,
}

impl AdapterCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is non-zero");
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: u64) -> Option<AdaptedPair> {
        self.inner.lock().get(&key).cloned()
    }

    pub fn put(&self, key: u64, pair: AdaptedPair) {
        self.inner.lock().put(key, pair);
    }
}

impl Default for AdapterCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ExperienceBand, Location, RemotePolicy};
    use crate::types::{GenericCandidate, GenericOffer};

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
    fn cache_roundtrips_an_adapted_pair() {
        let cache = AdapterCache::new(2);
        let key = fingerprint(&candidate("c1"), &offer("o1"), AlgorithmId::Smart);
        let pair = AdaptedPair {
            candidate: CandidatePayload::Generic(GenericCandidate::default()),
            offer: OfferPayload::Generic(GenericOffer::default()),
        };
        cache.put(key, pair);
        assert!(cache.get(key).is_some());
        assert!(cache.get(key.wrapping_add(1)).is_none());
    }

    #[test]
    fn fingerprint_distinguishes_algorithm() {
        let c = candidate("c1");
        let o = offer("o1");
        assert_ne!(
            fingerprint(&c, &o, AlgorithmId::Nexten),
            fingerprint(&c, &o, AlgorithmId::Smart)
        );
    }
}
