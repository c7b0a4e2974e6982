use models::{CourseDetails, CourseKey};
use std::collections::{HashMap, HashSet};

/// Session-lifetime cache of fetched course details, plus the set of keys
/// with a fetch currently in flight.
///
/// Owned by the session that uses it; there is no module-level shared
/// instance. Entries are never evicted or refreshed within a session: the
/// first fetched result for a key is the one every later lookup sees.
#[derive(Debug, Default)]
pub struct DetailCache {
    cache: HashMap<CourseKey, CourseDetails>,
    in_flight: HashSet<CourseKey>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CourseKey) -> Option<&CourseDetails> {
        self.cache.get(key)
    }

    pub fn is_in_flight(&self, key: &CourseKey) -> bool {
        self.in_flight.contains(key)
    }

    /// Claims the key for a fetch. Returns false when the key is already
    /// cached or a fetch for it is already running, in which case the caller
    /// must not start one.
    pub fn begin_fetch(&mut self, key: &CourseKey) -> bool {
        if self.cache.contains_key(key) || self.in_flight.contains(key) {
            return false;
        }
        self.in_flight.insert(key.clone());
        true
    }

    /// Stores a fetched result and releases the in-flight claim.
    pub fn complete(&mut self, key: CourseKey, details: CourseDetails) {
        self.in_flight.remove(&key);
        self.cache.insert(key, details);
    }

    /// Releases the in-flight claim without caching anything. Must be called
    /// on every failed fetch so the key can be retried.
    pub fn abort(&mut self, key: &CourseKey) {
        self.in_flight.remove(key);
    }
}
