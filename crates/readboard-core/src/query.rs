//! Query-string codec for the dashboard's navigation state.
//!
//! Four keys are tracked: `filter`, `feed`, `tag` and `article`. Each has a
//! declared default, and parsing is total: anything unexpected collapses to
//! that default instead of failing. Parameters the dashboard does not know
//! about are carried through untouched.

use std::fmt;

use url::form_urlencoded;

// ============================================================================
// FilterKind
// ============================================================================

/// Which slice of the article list is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Every article (default, omitted from URLs)
    #[default]
    All,
    /// Published today
    Today,
    /// Not yet read
    Unread,
    /// Favorited by the user
    Starred,
    /// Saved for later
    ReadLater,
    /// Read recently
    RecentlyRead,
}

impl FilterKind {
    /// Every variant, in menu order.
    pub const ALL: [FilterKind; 6] = [
        Self::All,
        Self::Today,
        Self::Unread,
        Self::Starred,
        Self::ReadLater,
        Self::RecentlyRead,
    ];

    /// Wire name used in the `filter` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Unread => "unread",
            Self::Starred => "starred",
            Self::ReadLater => "readLater",
            Self::RecentlyRead => "recentlyRead",
        }
    }

    /// Parse a wire name. Matching is case-sensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }

    /// Parse a wire name, falling back to [`FilterKind::All`].
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_default()
    }

    pub fn is_default(self) -> bool {
        self == Self::All
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// QueryKey
// ============================================================================

/// A query parameter owned by the navigation controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Filter,
    Feed,
    Tag,
    Article,
}

impl QueryKey {
    pub const ALL: [QueryKey; 4] = [Self::Filter, Self::Feed, Self::Tag, Self::Article];

    /// Parameter name in the URL.
    pub fn name(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Feed => "feed",
            Self::Tag => "tag",
            Self::Article => "article",
        }
    }
}

// ============================================================================
// QueryParams
// ============================================================================

/// Ordered `name=value` pairs of a URL search string.
///
/// Mirrors the browser's `URLSearchParams`: lookups return the first
/// occurrence, and setting a name replaces its first occurrence in place and
/// drops any duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a search string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set or remove `name`.
    ///
    /// `Some` replaces the first occurrence (or appends when missing) and
    /// removes later duplicates; `None` removes every occurrence.
    pub fn set(&mut self, name: &str, value: Option<&str>) {
        let Some(value) = value else {
            self.pairs.retain(|(n, _)| n != name);
            return;
        };

        match self.pairs.iter().position(|(n, _)| n == name) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut index = 0;
                self.pairs.retain(|(n, _)| {
                    let keep = index <= first || n != name;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((name.to_string(), value.to_string())),
        }
    }

    /// Return a copy with every change in `patch` applied, in order.
    pub fn apply(&self, patch: &NavigationPatch) -> Self {
        let mut next = self.clone();
        for (key, value) in patch.changes() {
            next.set(key.name(), value.as_deref());
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// NavigationPatch
// ============================================================================

/// A batch of key assignments that lands as a single URL transition.
///
/// Values are normalized as they are recorded: a default filter or an empty
/// string becomes a removal. Later assignments to the same key win.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationPatch {
    changes: Vec<(QueryKey, Option<String>)>,
}

impl NavigationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: FilterKind) -> &mut Self {
        let value = (!filter.is_default()).then(|| filter.as_str().to_string());
        self.record(QueryKey::Filter, value)
    }

    /// An empty slug clears the feed filter.
    pub fn set_feed(&mut self, slug: impl Into<String>) -> &mut Self {
        self.record(QueryKey::Feed, Some(slug.into()))
    }

    pub fn set_tag<S: Into<String>>(&mut self, tag: Option<S>) -> &mut Self {
        self.record(QueryKey::Tag, tag.map(Into::into))
    }

    pub fn clear_tag(&mut self) -> &mut Self {
        self.record(QueryKey::Tag, None)
    }

    pub fn set_article<S: Into<String>>(&mut self, article: Option<S>) -> &mut Self {
        self.record(QueryKey::Article, article.map(Into::into))
    }

    pub fn clear_article(&mut self) -> &mut Self {
        self.record(QueryKey::Article, None)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Recorded changes in assignment order. `None` means "remove".
    pub fn changes(&self) -> impl Iterator<Item = &(QueryKey, Option<String>)> {
        self.changes.iter()
    }

    /// Whether the patch assigns `key`.
    pub fn touches(&self, key: QueryKey) -> bool {
        self.changes.iter().any(|(k, _)| *k == key)
    }

    fn record(&mut self, key: QueryKey, value: Option<String>) -> &mut Self {
        let value = value.filter(|v| !v.is_empty());
        self.changes.retain(|(k, _)| *k != key);
        self.changes.push((key, value));
        self
    }
}

// ============================================================================
// NavigationState
// ============================================================================

/// The canonical, shareable view state.
///
/// Always normalized: `tag_key` and `selected_article_id` are never
/// `Some("")`, so two states that serialize to the same URL compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub filter: FilterKind,
    /// Feed slug; empty means no feed filter.
    pub feed_slug: String,
    /// Tag id or tag name (legacy URLs use names).
    pub tag_key: Option<String>,
    /// Article open in the reader.
    pub selected_article_id: Option<String>,
}

impl NavigationState {
    /// Parse the tracked keys out of `params`.
    pub fn from_params(params: &QueryParams) -> Self {
        let non_empty = |key: QueryKey| {
            params
                .get(key.name())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            filter: params
                .get(QueryKey::Filter.name())
                .map(FilterKind::parse_or_default)
                .unwrap_or_default(),
            feed_slug: non_empty(QueryKey::Feed).unwrap_or_default(),
            tag_key: non_empty(QueryKey::Tag),
            selected_article_id: non_empty(QueryKey::Article),
        }
    }

    /// Parse a search string, with or without the leading `?`.
    pub fn from_query(search: &str) -> Self {
        Self::from_params(&QueryParams::parse(search))
    }

    /// Parse the query part of a link such as `/?tag=tech&filter=unread`.
    pub fn from_href(href: &str) -> Self {
        let query = href.split_once('?').map_or("", |(_, q)| q);
        let query = query.split_once('#').map_or(query, |(q, _)| q);
        Self::from_query(query)
    }

    /// The patch that reproduces this state over any URL.
    pub fn to_patch(&self) -> NavigationPatch {
        let mut patch = NavigationPatch::new();
        patch
            .set_filter(self.filter)
            .set_feed(self.feed_slug.clone())
            .set_tag(self.tag_key.clone())
            .set_article(self.selected_article_id.clone());
        patch
    }

    /// Canonical query string with defaults omitted.
    pub fn to_query(&self) -> String {
        QueryParams::default()
            .apply(&self.to_patch())
            .to_query_string()
    }

    /// Whether the reader should be showing an article.
    pub fn is_reader_open(&self) -> bool {
        self.selected_article_id.is_some()
    }

    pub fn with_filter(mut self, filter: FilterKind) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_feed(mut self, slug: impl Into<String>) -> Self {
        self.feed_slug = slug.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_key = Some(tag.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn with_article(mut self, id: impl Into<String>) -> Self {
        self.selected_article_id = Some(id.into()).filter(|a| !a.is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse() {
        for filter in FilterKind::ALL {
            assert_eq!(FilterKind::parse(filter.as_str()), Some(filter));
        }
        assert_eq!(FilterKind::parse("readlater"), None);
        assert_eq!(FilterKind::parse_or_default("bogus"), FilterKind::All);
        assert_eq!(FilterKind::parse_or_default(""), FilterKind::All);
    }

    #[test]
    fn test_params_get_first_occurrence() {
        let params = QueryParams::parse("?tag=a&tag=b&x=1");
        assert_eq!(params.get("tag"), Some("a"));
        assert_eq!(params.get("x"), Some("1"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_params_set_replaces_in_place() {
        let mut params = QueryParams::parse("a=1&tag=x&b=2&tag=y");
        params.set("tag", Some("z"));
        assert_eq!(params.to_query_string(), "a=1&tag=z&b=2");

        params.set("c", Some("3"));
        assert_eq!(params.to_query_string(), "a=1&tag=z&b=2&c=3");

        params.set("a", None);
        assert_eq!(params.to_query_string(), "tag=z&b=2&c=3");
    }

    #[test]
    fn test_params_encoding() {
        let mut params = QueryParams::default();
        params.set("tag", Some("Science & Tech"));
        assert_eq!(params.to_query_string(), "tag=Science+%26+Tech");
        assert_eq!(
            QueryParams::parse(&params.to_query_string()).get("tag"),
            Some("Science & Tech")
        );
    }

    #[test]
    fn test_state_from_empty_query() {
        let state = NavigationState::from_query("");
        assert_eq!(state, NavigationState::default());
        assert_eq!(state.filter, FilterKind::All);
        assert_eq!(state.feed_slug, "");
        assert_eq!(state.tag_key, None);
        assert_eq!(state.selected_article_id, None);
    }

    #[test]
    fn test_state_malformed_values_fall_back() {
        let state = NavigationState::from_query("?filter=everything&tag=&article=&feed=");
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn test_state_parses_all_keys() {
        let state = NavigationState::from_query("?filter=readLater&feed=rust-blog&tag=tech&article=42");
        assert_eq!(
            state,
            NavigationState::default()
                .with_filter(FilterKind::ReadLater)
                .with_feed("rust-blog")
                .with_tag("tech")
                .with_article("42")
        );
        assert!(state.is_reader_open());
    }

    #[test]
    fn test_state_round_trip() {
        let states = [
            NavigationState::default(),
            NavigationState::default().with_filter(FilterKind::Unread),
            NavigationState::default().with_feed("a b").with_tag("Technology"),
            NavigationState::default()
                .with_filter(FilterKind::RecentlyRead)
                .with_feed("hn")
                .with_tag("t=1&2")
                .with_article("abc-123"),
        ];
        for state in states {
            assert_eq!(NavigationState::from_query(&state.to_query()), state);
        }
    }

    #[test]
    fn test_from_href() {
        assert_eq!(NavigationState::from_href("/"), NavigationState::default());
        assert_eq!(
            NavigationState::from_href("/?tag=tech&filter=unread#top"),
            NavigationState::default()
                .with_tag("tech")
                .with_filter(FilterKind::Unread)
        );
    }

    #[test]
    fn test_default_filter_omitted() {
        let state = NavigationState::default().with_tag("tech");
        assert_eq!(state.to_query(), "tag=tech");
        assert_eq!(NavigationState::default().to_query(), "");
    }

    #[test]
    fn test_patch_normalizes_and_overrides() {
        let mut patch = NavigationPatch::new();
        patch
            .set_filter(FilterKind::Unread)
            .set_feed("")
            .set_article(Some("1"))
            .set_article(Some("2"));

        let changes: Vec<_> = patch.changes().cloned().collect();
        assert_eq!(
            changes,
            vec![
                (QueryKey::Filter, Some("unread".to_string())),
                (QueryKey::Feed, None),
                (QueryKey::Article, Some("2".to_string())),
            ]
        );
        assert!(patch.touches(QueryKey::Feed));
        assert!(!patch.touches(QueryKey::Tag));
    }

    #[test]
    fn test_apply_keeps_untracked_params() {
        let params = QueryParams::parse("utm_source=mail&filter=today&article=9");
        let mut patch = NavigationPatch::new();
        patch.set_filter(FilterKind::All).clear_article();
        assert_eq!(params.apply(&patch).to_query_string(), "utm_source=mail");
    }
}
