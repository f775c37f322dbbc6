//! Shared resource cache

use std::collections::HashMap;
use std::sync::Mutex;

/// Process-wide memo from resource URL to its resolved display value.
///
/// Unbounded, never evicted, never invalidated: the upstream API serves
/// immutable resources for a given URL, so a value written once stays
/// correct for the process lifetime.
///
/// Lookup-then-store is deliberately not atomic. Two tasks resolving the
/// same uncached URL may both miss and both fetch; the loser of that race
/// stores the same value again. That costs one redundant request, not
/// correctness, and the cache stays free of per-key coordination.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: Mutex<HashMap<String, String>>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `url`, if any
    pub fn lookup(&self, url: &str) -> Option<String> {
        self.entries.lock().unwrap().get(url).cloned()
    }

    /// Stores the resolved value for `url`
    pub fn store(&self, url: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(url.to_string(), value.to_string());
    }

    /// Number of distinct resources cached so far
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_miss() {
        let cache = ResourceCache::new();
        assert_eq!(cache.lookup("https://example.com/films/1/"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_then_lookup() {
        let cache = ResourceCache::new();
        cache.store("https://example.com/films/1/", "A New Hope");

        assert_eq!(
            cache.lookup("https://example.com/films/1/"),
            Some("A New Hope".to_string())
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_repeated_store_is_stable() {
        let cache = ResourceCache::new();
        cache.store("https://example.com/planets/1/", "Tatooine");
        cache.store("https://example.com/planets/1/", "Tatooine");

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.lookup("https://example.com/planets/1/"),
            Some("Tatooine".to_string())
        );
    }

    #[test]
    fn test_distinct_keys_grow_the_cache() {
        let cache = ResourceCache::new();
        cache.store("a", "1");
        cache.store("b", "2");
        cache.store("c", "3");

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.lookup("b"), Some("2".to_string()));
    }
}
