//! Lookup resolution of URL keys against loaded collections.
//!
//! Resolution is best effort. A collection that has not loaded (or failed to
//! load) is passed as `None` and simply resolves to nothing; once it arrives
//! the caller re-runs [`resolve`] and the view catches up.

use crate::model::{Feed, Tag};
use crate::query::NavigationState;

/// The feed and tag the current URL points at, if they are known.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSelection<'a> {
    pub feed: Option<&'a Feed>,
    pub tag: Option<&'a Tag>,
}

/// Resolve a feed slug and tag key.
///
/// - feed: exact slug match; an empty slug never matches
/// - tag: the first tag whose id *or* name equals the key
pub fn resolve<'a>(
    feed_slug: &str,
    tag_key: Option<&str>,
    feeds: Option<&'a [Feed]>,
    tags: Option<&'a [Tag]>,
) -> ResolvedSelection<'a> {
    let feed = match (feed_slug, feeds) {
        ("", _) | (_, None) => None,
        (slug, Some(feeds)) => feeds.iter().find(|f| f.slug == slug),
    };

    let tag = tag_key
        .filter(|key| !key.is_empty())
        .zip(tags)
        .and_then(|(key, tags)| tags.iter().find(|t| t.id == key || t.name == key));

    ResolvedSelection { feed, tag }
}

/// [`resolve`] for a whole [`NavigationState`].
pub fn resolve_state<'a>(
    state: &NavigationState,
    feeds: Option<&'a [Feed]>,
    tags: Option<&'a [Tag]>,
) -> ResolvedSelection<'a> {
    resolve(&state.feed_slug, state.tag_key.as_deref(), feeds, tags)
}
