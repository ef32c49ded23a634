//! Data client for the feed API.
//!
//! Each query is a [`LocalResource`] that re-runs when its inputs change or
//! when its [`CacheKey`] is invalidated. Invalidation is tracked by
//! generation in a [`QueryCache`], so refreshing a key whose request is still
//! in flight does not start a second one.

use leptos::prelude::*;
use readboard_core::config::ApiConfig;
use readboard_core::{
    Article, ArticleSummary, CacheKey, Feed, FetchError, FilterKind, NavigationState, QueryCache,
    Tag,
};
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::utils::{fetch_json, log};

pub type QueryResult<T> = Result<T, FetchError>;

// =============================================================================
// Endpoints
// =============================================================================

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `GET {base}/feed/all?page=1&perPage=N`
pub fn feeds_url(api: &ApiConfig, page: u32) -> String {
    format!(
        "{}/feed/all?page={}&perPage={}",
        api.base_url, page, api.feeds_per_page
    )
}

/// `GET {base}/tag/all`
pub fn tags_url(api: &ApiConfig) -> String {
    format!("{}/tag/all", api.base_url)
}

/// `GET {base}/article/all` with the list-shaping keys of `state`.
///
/// The selected article is not part of the list query.
pub fn articles_url(api: &ApiConfig, state: &NavigationState) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if state.filter != FilterKind::All {
        query.append_pair("filter", state.filter.as_str());
    }
    if !state.feed_slug.is_empty() {
        query.append_pair("feed", &state.feed_slug);
    }
    if let Some(tag) = &state.tag_key {
        query.append_pair("tag", tag);
    }
    let query = query.finish();

    if query.is_empty() {
        format!("{}/article/all", api.base_url)
    } else {
        format!("{}/article/all?{}", api.base_url, query)
    }
}

/// `GET {base}/article/{id}`
pub fn article_url(api: &ApiConfig, id: &str) -> String {
    format!("{}/article/{}", api.base_url, encode(id))
}

// =============================================================================
// QueryClient
// =============================================================================

/// Shared handle to the API and its query bookkeeping.
#[derive(Clone, Copy)]
pub struct QueryClient {
    api: StoredValue<ApiConfig>,
    cache: StoredValue<QueryCache>,
    feed_list: RwSignal<u64>,
    tag_list: RwSignal<u64>,
    article_list: RwSignal<u64>,
    article: RwSignal<u64>,
}

impl QueryClient {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api: StoredValue::new(api),
            cache: StoredValue::new(QueryCache::new()),
            feed_list: RwSignal::new(0),
            tag_list: RwSignal::new(0),
            article_list: RwSignal::new(0),
            article: RwSignal::new(0),
        }
    }

    fn revision(&self, key: CacheKey) -> RwSignal<u64> {
        match key {
            CacheKey::FeedList => self.feed_list,
            CacheKey::TagList => self.tag_list,
            CacheKey::ArticleList => self.article_list,
            CacheKey::Article => self.article,
        }
    }

    /// Subscribe the running effect or resource to invalidations of `key`.
    pub fn track(&self, key: CacheKey) {
        self.revision(key).track();
    }

    /// Mark `key` stale, refetching every resource that tracks it.
    pub fn invalidate(&self, key: CacheKey) {
        let generation = self
            .cache
            .try_update_value(|cache| cache.invalidate(key))
            .flatten();
        if let Some(generation) = generation {
            self.revision(key).set(generation);
        }
    }

    /// Fetch `url` as one request for `key`.
    async fn run<T: DeserializeOwned>(self, key: CacheKey, url: String) -> QueryResult<T> {
        let timeout_ms = self.api.with_value(|api| api.timeout_ms);
        let generation = self
            .cache
            .try_update_value(|cache| cache.begin_fetch(key))
            .unwrap_or_default();

        let result = fetch_json::<T>(&url, timeout_ms).await;

        let current = self
            .cache
            .try_update_value(|cache| cache.finish_fetch(key, generation))
            .unwrap_or(true);
        if !current {
            log::debug(&format!("{}: stale response for {}", key.name(), url));
        }
        if let Err(err) = &result {
            log::warn(&format!("{}: {}", key.name(), err));
        }
        result
    }

    /// All feeds, first page of the configured size.
    pub fn feeds_resource(self) -> LocalResource<QueryResult<Vec<Feed>>> {
        LocalResource::new(move || {
            self.track(CacheKey::FeedList);
            let url = self.api.with_value(|api| feeds_url(api, 1));
            async move { self.run(CacheKey::FeedList, url).await }
        })
    }

    pub fn tags_resource(self) -> LocalResource<QueryResult<Vec<Tag>>> {
        LocalResource::new(move || {
            self.track(CacheKey::TagList);
            let url = self.api.with_value(tags_url);
            async move { self.run(CacheKey::TagList, url).await }
        })
    }

    /// Articles for the list-shaping part of the navigation state.
    ///
    /// `url` should be a memo so that opening an article does not refetch
    /// the list.
    pub fn articles_resource(
        self,
        url: Memo<String>,
    ) -> LocalResource<QueryResult<Vec<ArticleSummary>>> {
        LocalResource::new(move || {
            self.track(CacheKey::ArticleList);
            let url = url.get();
            async move { self.run(CacheKey::ArticleList, url).await }
        })
    }

    /// The article open in the reader, `None` while the reader is closed.
    pub fn article_resource(
        self,
        id: Memo<Option<String>>,
    ) -> LocalResource<Option<QueryResult<Article>>> {
        LocalResource::new(move || {
            self.track(CacheKey::Article);
            let url = id
                .get()
                .map(|id| self.api.with_value(|api| article_url(api, &id)));
            async move {
                match url {
                    Some(url) => Some(self.run(CacheKey::Article, url).await),
                    None => None,
                }
            }
        })
    }

    pub fn with_api<R>(&self, f: impl FnOnce(&ApiConfig) -> R) -> R {
        self.api.with_value(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ApiConfig {
        ApiConfig::default()
    }

    #[test]
    fn test_feeds_url() {
        assert_eq!(feeds_url(&api(), 1), "/api/feed/all?page=1&perPage=100");
    }

    #[test]
    fn test_tags_url() {
        assert_eq!(tags_url(&api()), "/api/tag/all");
    }

    #[test]
    fn test_articles_url_default_view() {
        let state = NavigationState::default();
        assert_eq!(articles_url(&api(), &state), "/api/article/all");
    }

    #[test]
    fn test_articles_url_ignores_selected_article() {
        let state = NavigationState::from_query("filter=unread&tag=tech&article=42");
        assert_eq!(
            articles_url(&api(), &state),
            "/api/article/all?filter=unread&tag=tech"
        );
    }

    #[test]
    fn test_articles_url_encodes_values() {
        let state = NavigationState::from_query("feed=a%20b&tag=C%2B%2B");
        assert_eq!(
            articles_url(&api(), &state),
            "/api/article/all?feed=a+b&tag=C%2B%2B"
        );
    }

    #[test]
    fn test_article_url_encodes_id() {
        assert_eq!(article_url(&api(), "42"), "/api/article/42");
        assert_eq!(article_url(&api(), "a/b"), "/api/article/a%2Fb");
    }
}
