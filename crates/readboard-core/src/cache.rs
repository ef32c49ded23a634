//! Generation bookkeeping for the data client's queries.
//!
//! Each [`CacheKey`] carries a generation counter and a count of requests in
//! flight.
//! Invalidating a key bumps its generation, which consumers treat as "refetch
//! now". A key with any request still in flight is left alone, so repeated
//! invalidation never stacks duplicate requests.

use std::collections::HashMap;

use tracing::debug;

/// A named query of the data client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// All feeds (first large page)
    FeedList,
    /// All tags
    TagList,
    /// Articles for the current filter/feed/tag
    ArticleList,
    /// The article open in the reader
    Article,
}

impl CacheKey {
    /// Keys refreshed in the background. The reader's article is not one of
    /// them, so an open read is never refetched under the user.
    pub const BACKGROUND: [CacheKey; 3] = [Self::FeedList, Self::TagList, Self::ArticleList];

    pub fn is_background(self) -> bool {
        Self::BACKGROUND.contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FeedList => "feed.all",
            Self::TagList => "tag.all",
            Self::ArticleList => "article.all",
            Self::Article => "article.byId",
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Entry {
    generation: u64,
    /// Requests started and not yet finished. Overlapping fetches of one key
    /// happen when its inputs change mid-request.
    in_flight: u32,
}

/// Per-key generation and in-flight tracking.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, Entry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation of `key` (0 until first invalidated).
    pub fn generation(&self, key: CacheKey) -> u64 {
        self.entries.get(&key).map_or(0, |e| e.generation)
    }

    pub fn is_in_flight(&self, key: CacheKey) -> bool {
        self.entries
            .get(&key)
            .is_some_and(|e| e.in_flight > 0)
    }

    /// Mark a request for `key` as started. Returns the generation it serves.
    pub fn begin_fetch(&mut self, key: CacheKey) -> u64 {
        let entry = self.entries.entry(key).or_default();
        entry.in_flight += 1;
        entry.generation
    }

    /// Mark a request as finished.
    ///
    /// Returns `true` if the result is current, `false` if the key was
    /// invalidated after the request started.
    pub fn finish_fetch(&mut self, key: CacheKey, generation: u64) -> bool {
        let entry = self.entries.entry(key).or_default();
        entry.in_flight = entry.in_flight.saturating_sub(1);
        generation == entry.generation
    }

    /// Mark `key` stale.
    ///
    /// Returns the new generation, or `None` while any request for `key` is
    /// in flight and will deliver fresh data anyway.
    pub fn invalidate(&mut self, key: CacheKey) -> Option<u64> {
        let entry = self.entries.entry(key).or_default();
        if entry.in_flight > 0 {
            debug!(
                key = key.name(),
                in_flight = entry.in_flight,
                "cache: skip invalidate, request in flight"
            );
            return None;
        }
        entry.generation += 1;
        debug!(key = key.name(), generation = entry.generation, "cache: invalidated");
        Some(entry.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidate_bumps_generation() {
        let mut cache = QueryCache::new();
        assert_eq!(cache.generation(CacheKey::FeedList), 0);
        assert_eq!(cache.invalidate(CacheKey::FeedList), Some(1));
        assert_eq!(cache.invalidate(CacheKey::FeedList), Some(2));
        assert_eq!(cache.generation(CacheKey::TagList), 0);
    }

    #[test]
    fn test_in_flight_suppresses_invalidate() {
        let mut cache = QueryCache::new();
        let generation = cache.begin_fetch(CacheKey::ArticleList);
        assert!(cache.is_in_flight(CacheKey::ArticleList));
        assert_eq!(cache.invalidate(CacheKey::ArticleList), None);
        assert_eq!(cache.invalidate(CacheKey::ArticleList), None);

        assert!(cache.finish_fetch(CacheKey::ArticleList, generation));
        assert!(!cache.is_in_flight(CacheKey::ArticleList));
        assert_eq!(cache.invalidate(CacheKey::ArticleList), Some(1));
    }

    #[test]
    fn test_overlapping_fetches_keep_key_in_flight() {
        let mut cache = QueryCache::new();
        let first = cache.begin_fetch(CacheKey::ArticleList);
        let second = cache.begin_fetch(CacheKey::ArticleList);

        assert!(cache.finish_fetch(CacheKey::ArticleList, first));
        assert!(cache.is_in_flight(CacheKey::ArticleList));
        assert_eq!(cache.invalidate(CacheKey::ArticleList), None);

        assert!(cache.finish_fetch(CacheKey::ArticleList, second));
        assert!(!cache.is_in_flight(CacheKey::ArticleList));
        assert_eq!(cache.invalidate(CacheKey::ArticleList), Some(1));
    }

    #[test]
    fn test_unmatched_finish_does_not_underflow() {
        let mut cache = QueryCache::new();
        assert!(cache.finish_fetch(CacheKey::FeedList, 0));
        assert!(!cache.is_in_flight(CacheKey::FeedList));
        let generation = cache.begin_fetch(CacheKey::FeedList);
        assert!(cache.is_in_flight(CacheKey::FeedList));
        cache.finish_fetch(CacheKey::FeedList, generation);
        assert!(!cache.is_in_flight(CacheKey::FeedList));
    }

    #[test]
    fn test_superseded_fetch_is_stale() {
        let mut cache = QueryCache::new();
        let first = cache.begin_fetch(CacheKey::TagList);
        assert!(cache.finish_fetch(CacheKey::TagList, first));
        cache.invalidate(CacheKey::TagList);
        // A late completion of the old generation is stale.
        assert!(!cache.finish_fetch(CacheKey::TagList, first));
    }

    #[test]
    fn test_background_keys() {
        assert!(CacheKey::FeedList.is_background());
        assert!(CacheKey::ArticleList.is_background());
        assert!(!CacheKey::Article.is_background());
    }
}
