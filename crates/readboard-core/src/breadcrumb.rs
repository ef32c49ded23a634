//! Header view-model: filter labels and the breadcrumb trail.

use url::form_urlencoded;

use crate::query::{FilterKind, QueryKey};
use crate::resolve::ResolvedSelection;

/// Label of the root crumb.
pub const HOME_LABEL: &str = "Home";

/// Path of the root view.
pub const HOME_HREF: &str = "/";

impl FilterKind {
    /// Human-readable name shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Articles",
            Self::Today => "Today",
            Self::Unread => "Unread",
            Self::Starred => "Favorited",
            Self::ReadLater => "Read Later",
            Self::RecentlyRead => "Recently Read",
        }
    }
}

/// Label for a raw `filter` value. Unknown values read as "All Articles".
pub fn filter_label(raw: &str) -> &'static str {
    FilterKind::parse_or_default(raw).label()
}

/// One breadcrumb entry. `href` is `None` for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    fn link(label: impl Into<String>, href: String) -> Self {
        Self {
            label: label.into(),
            href: Some(href),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

/// Ordered crumbs: Home, then tag, then feed, then the filter label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreadcrumbTrail(Vec<Crumb>);

impl BreadcrumbTrail {
    pub fn crumbs(&self) -> &[Crumb] {
        &self.0
    }

    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The terminal, non-link crumb.
    pub fn current(&self) -> Option<&Crumb> {
        self.0.last()
    }
}

impl IntoIterator for BreadcrumbTrail {
    type Item = Crumb;
    type IntoIter = std::vec::IntoIter<Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Minimal link to a view.
///
/// `tag` and `feed` are included only when non-empty, `filter` only when it
/// is not the default; `/` when nothing is left.
pub fn breadcrumb_href(tag: Option<&str>, feed: Option<&str>, filter: FilterKind) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(tag) = tag.filter(|t| !t.is_empty()) {
        query.append_pair(QueryKey::Tag.name(), tag);
    }
    if let Some(feed) = feed.filter(|f| !f.is_empty()) {
        query.append_pair(QueryKey::Feed.name(), feed);
    }
    if !filter.is_default() {
        query.append_pair(QueryKey::Filter.name(), filter.as_str());
    }

    let query = query.finish();
    if query.is_empty() {
        HOME_HREF.to_string()
    } else {
        format!("/?{}", query)
    }
}

/// Build the breadcrumb for a resolved selection.
///
/// Tag links use the tag's canonical id even when the URL addressed it by
/// name. The tag link drops the feed so it leads back to tag + filter.
pub fn breadcrumb_trail(selection: &ResolvedSelection<'_>, filter: FilterKind) -> BreadcrumbTrail {
    let mut crumbs = vec![Crumb::link(HOME_LABEL, HOME_HREF.to_string())];
    let tag_id = selection.tag.map(|t| t.id.as_str());

    if let Some(tag) = selection.tag {
        crumbs.push(Crumb::link(
            tag.name.clone(),
            breadcrumb_href(tag_id, None, filter),
        ));
    }

    if let Some(feed) = selection.feed {
        crumbs.push(Crumb::link(
            feed.title.clone(),
            breadcrumb_href(tag_id, Some(&feed.slug), filter),
        ));
    }

    crumbs.push(Crumb::current(filter.label()));
    BreadcrumbTrail(crumbs)
}
