//! URL resolution caching.
//!
//! [`ResolutionCache`] remembers which route a URL path resolved to, so a
//! [`MemoryRouter`](crate::MemoryRouter) does not walk its route table again
//! for paths it has already seen. It is gated behind the `cache` feature and
//! uses the [`lru`] crate internally.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations.
//!
//! # Examples
//!
//! ```
//! use stream_navigator::cache::ResolutionCache;
//! use stream_navigator::matching::ResolvedUrl;
//! use stream_navigator::RouteParams;
//!
//! let mut cache = ResolutionCache::new();
//! cache.insert("/games".to_string(), ResolvedUrl::new("games", RouteParams::new()));
//!
//! assert_eq!(cache.get("/games").unwrap().route_name, "games");
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::matching::ResolvedUrl;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of full cache invalidations (via [`ResolutionCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache mapping URL paths to resolved routes.
///
/// Cleared whenever the route table changes.
#[derive(Debug)]
pub struct ResolutionCache {
    entries: LruCache<String, ResolvedUrl>,
    stats: CacheStats,
}

impl ResolutionCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity (256 entries).
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self::with_capacity(capacity)
    }

    /// Create a cache with a custom capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Look up the route cached for `path`. Updates hit/miss stats.
    pub fn get(&mut self, path: &str) -> Option<ResolvedUrl> {
        if let Some(entry) = self.entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Resolution cache hit for '{}'", path);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Resolution cache miss for '{}'", path);
            None
        }
    }

    /// Remember the route `path` resolved to.
    pub fn insert(&mut self, path: String, resolved: ResolvedUrl) {
        trace_log!("Caching route '{}' for '{}'", resolved.route_name, path);
        self.entries.push(path, resolved);
    }

    /// Drop every entry and count an invalidation.
    pub fn clear(&mut self) {
        let len = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Resolution cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ResolutionCache {
    fn clone(&self) -> Self {
        Self {
            entries: LruCache::new(self.entries.cap()),
            stats: self.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteParams;

    fn resolved(name: &str) -> ResolvedUrl {
        ResolvedUrl::new(name, RouteParams::new())
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let mut cache = ResolutionCache::new();
        assert!(cache.get("/featured").is_none());

        cache.insert("/featured".to_string(), resolved("featured"));
        assert_eq!(cache.get("/featured"), Some(resolved("featured")));

        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
        assert!((cache.stats().hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cache_eviction() {
        let mut cache = ResolutionCache::with_capacity(NonZeroUsize::new(2).unwrap());
        cache.insert("/a".to_string(), resolved("a"));
        cache.insert("/b".to_string(), resolved("b"));
        cache.insert("/c".to_string(), resolved("c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("/a").is_none());
        assert!(cache.get("/c").is_some());
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = ResolutionCache::new();
        cache.insert("/games".to_string(), resolved("games"));
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_clone_starts_empty() {
        let mut cache = ResolutionCache::new();
        cache.insert("/games".to_string(), resolved("games"));

        let clone = cache.clone();
        assert!(clone.is_empty());
    }
}
