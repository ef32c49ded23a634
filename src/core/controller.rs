//! Dashboard controller hook.
//!
//! Joins the navigation state with the loaded collections and the viewport
//! into everything the dashboard components render from.

use leptos::prelude::*;
use leptos_use::use_media_query;
use readboard_core::{
    Article, ArticleSummary, BreadcrumbTrail, Feed, OverlayState, ResolvedSelection, Tag, Viewport,
    breadcrumb_trail, resolve_state,
};

use super::client::{QueryClient, QueryResult, articles_url};
use super::navigation::NavigationContext;
use crate::app::AppContext;

/// Owned copy of the feed and tag the URL resolves to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub feed: Option<Feed>,
    pub tag: Option<Tag>,
}

impl Selection {
    fn resolved(&self) -> ResolvedSelection<'_> {
        ResolvedSelection {
            feed: self.feed.as_ref(),
            tag: self.tag.as_ref(),
        }
    }
}

/// Reactive view of the dashboard. `Copy`, like the context it is built on.
#[derive(Clone, Copy)]
pub struct NavigationController {
    pub nav: NavigationContext,
    pub client: QueryClient,
    /// Loaded feeds, `None` while pending or after a failed load.
    pub feeds: Memo<Option<Vec<Feed>>>,
    pub tags: Memo<Option<Vec<Tag>>>,
    pub articles: LocalResource<QueryResult<Vec<ArticleSummary>>>,
    pub article: LocalResource<Option<QueryResult<Article>>>,
    pub selection: Memo<Selection>,
    pub breadcrumb: Memo<BreadcrumbTrail>,
    pub overlay: Memo<OverlayState>,
}

impl NavigationController {
    pub fn close_overlay(&self) {
        self.nav.close_overlay();
    }
}

/// Loaded collection, or `None` while pending or after a failed load.
///
/// Both cases resolve to "not found"; the failure itself is logged by the
/// client.
fn loaded<T: Clone + 'static>(resource: LocalResource<QueryResult<Vec<T>>>) -> Option<Vec<T>> {
    resource.get().and_then(Result::ok)
}

/// Build the controller for the dashboard page.
pub fn use_navigation_controller() -> NavigationController {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let nav = ctx.nav;
    let client = ctx.client;

    let narrow_query = ctx.config.with_value(|c| c.layout.narrow_media_query());
    let is_narrow = use_media_query(narrow_query);

    let feed_query = client.feeds_resource();
    let tag_query = client.tags_resource();
    let feeds = Memo::new(move |_| loaded(feed_query));
    let tags = Memo::new(move |_| loaded(tag_query));

    let list_url = Memo::new(move |_| {
        let state = nav.navigation_state();
        client.with_api(|api| articles_url(api, &state))
    });
    let articles = client.articles_resource(list_url);

    let selected = Memo::new(move |_| nav.with(|s| s.selected_article_id.clone()));
    let article = client.article_resource(selected);

    let selection = Memo::new(move |_| {
        let state = nav.navigation_state();
        feeds.with(|feeds| {
            tags.with(|tags| {
                let resolved = resolve_state(&state, feeds.as_deref(), tags.as_deref());
                Selection {
                    feed: resolved.feed.cloned(),
                    tag: resolved.tag.cloned(),
                }
            })
        })
    });

    let breadcrumb = Memo::new(move |_| {
        let filter = nav.with(|s| s.filter);
        selection.with(|s| breadcrumb_trail(&s.resolved(), filter))
    });

    let overlay = Memo::new(move |_| {
        let viewport = Viewport::from_narrow(is_narrow.get());
        nav.with(|state| OverlayState::from_state(state, viewport))
    });

    NavigationController {
        nav,
        client,
        feeds,
        tags,
        articles,
        article,
        selection,
        breadcrumb,
        overlay,
    }
}
