//! End-to-end navigation scenarios through an in-memory history.

use readboard_core::{
    BreadcrumbTrail, Feed, FilterKind, HistoryMode, MemoryHistory, NavigationState, OverlayState,
    QueryStore, ReaderLayout, Tag, Viewport, breadcrumb_trail, overlay, resolve_state,
};

struct Dashboard {
    store: QueryStore<MemoryHistory>,
    feeds: Option<Vec<Feed>>,
    tags: Option<Vec<Tag>>,
    viewport: Viewport,
}

impl Dashboard {
    fn open(url: &str) -> Self {
        Self {
            store: QueryStore::new(MemoryHistory::new(url), HistoryMode::Push),
            feeds: None,
            tags: None,
            viewport: Viewport::Wide,
        }
    }

    fn state(&self) -> NavigationState {
        self.store.state()
    }

    fn breadcrumb(&self) -> BreadcrumbTrail {
        let state = self.state();
        let resolved = resolve_state(&state, self.feeds.as_deref(), self.tags.as_deref());
        breadcrumb_trail(&resolved, state.filter)
    }

    fn overlay(&self) -> OverlayState {
        OverlayState::from_state(&self.state(), self.viewport)
    }

    fn close_overlay(&mut self) -> bool {
        self.store.commit(&overlay::dismiss_patch())
    }

    fn assert_overlay_matches_url(&self) {
        assert_eq!(
            self.overlay().is_open(),
            self.state().selected_article_id.is_some()
        );
    }
}

fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn feed(slug: &str, title: &str) -> Feed {
    Feed {
        slug: slug.to_string(),
        title: title.to_string(),
    }
}

#[test]
fn root_url_is_the_default_view() {
    let dashboard = Dashboard::open("/");

    assert_eq!(dashboard.state(), NavigationState::default());
    assert_eq!(dashboard.breadcrumb().labels(), vec!["Home", "All Articles"]);
    assert_eq!(dashboard.overlay(), OverlayState::Closed);
}

#[test]
fn tag_and_filter_show_in_breadcrumb() {
    let mut dashboard = Dashboard::open("/?filter=unread&tag=tech");
    dashboard.tags = Some(vec![tag("tech", "Technology")]);

    assert_eq!(
        dashboard.breadcrumb().labels(),
        vec!["Home", "Technology", "Unread"]
    );
}

#[test]
fn legacy_tag_name_links_to_canonical_id() {
    let mut dashboard = Dashboard::open("/?tag=Technology");
    dashboard.tags = Some(vec![tag("tech", "Technology")]);

    let trail = dashboard.breadcrumb();
    assert_eq!(trail.crumbs()[1].href.as_deref(), Some("/?tag=tech"));
}

#[test]
fn dismissing_the_reader_clears_the_article() {
    let mut dashboard = Dashboard::open("/?article=42");
    assert_eq!(dashboard.overlay(), OverlayState::Open(ReaderLayout::Inline));

    assert!(dashboard.close_overlay());
    assert_eq!(dashboard.store.backend().current(), "/");
    assert_eq!(dashboard.overlay(), OverlayState::Closed);
    dashboard.assert_overlay_matches_url();

    // Closing again is a no-op, not another history entry.
    let entries = dashboard.store.backend().entries().len();
    assert!(!dashboard.close_overlay());
    assert_eq!(dashboard.store.backend().entries().len(), entries);
}

#[test]
fn viewport_flip_relayouts_without_closing() {
    let mut dashboard = Dashboard::open("/?article=42");
    let before = dashboard.overlay();
    assert_eq!(before.layout(), Some(ReaderLayout::Inline));

    dashboard.viewport = Viewport::Narrow;
    let after = dashboard.overlay();
    assert_eq!(after, OverlayState::Open(ReaderLayout::Sheet));
    assert_eq!(
        overlay::OverlayTransition::between(before, after),
        Some(overlay::OverlayTransition::Relayout(ReaderLayout::Sheet))
    );
    assert_eq!(dashboard.state().selected_article_id.as_deref(), Some("42"));
}

#[test]
fn feed_segment_appears_once_feeds_load() {
    let mut dashboard = Dashboard::open("/?feed=tech-news");
    assert_eq!(dashboard.breadcrumb().labels(), vec!["Home", "All Articles"]);

    dashboard.feeds = Some(vec![feed("hn", "Hacker News"), feed("tech-news", "Tech News")]);
    assert_eq!(
        dashboard.breadcrumb().labels(),
        vec!["Home", "Tech News", "All Articles"]
    );
}

#[test]
fn failed_tag_load_degrades_breadcrumb() {
    // A failed load reaches the resolver the same way as "not loaded yet".
    let mut dashboard = Dashboard::open("/?tag=tech&feed=hn&filter=today");
    dashboard.feeds = Some(vec![feed("hn", "Hacker News")]);
    dashboard.tags = None;

    let trail = dashboard.breadcrumb();
    assert_eq!(trail.labels(), vec!["Home", "Hacker News", "Today"]);
    assert_eq!(
        trail.crumbs()[1].href.as_deref(),
        Some("/?feed=hn&filter=today")
    );
}

#[test]
fn filter_change_keeps_reader_open() {
    let mut dashboard = Dashboard::open("/?article=7");
    assert!(dashboard.store.set_filter(FilterKind::Starred));
    assert!(dashboard.overlay().is_open());
    assert_eq!(dashboard.store.backend().current(), "/?article=7&filter=starred");
}

#[test]
fn overlay_tracks_url_through_history() {
    let mut dashboard = Dashboard::open("/");
    dashboard.assert_overlay_matches_url();

    dashboard.store.set_selected_article(Some("1"));
    dashboard.assert_overlay_matches_url();
    assert!(dashboard.overlay().is_open());

    dashboard.store.backend_mut().back();
    dashboard.store.sync();
    dashboard.assert_overlay_matches_url();
    assert!(!dashboard.overlay().is_open());

    dashboard.store.backend_mut().forward();
    dashboard.store.sync();
    dashboard.assert_overlay_matches_url();
    assert!(dashboard.overlay().is_open());
}

#[test]
fn breadcrumb_order_is_fixed() {
    let mut dashboard = Dashboard::open("/?feed=hn&tag=t1&filter=recentlyRead");
    dashboard.feeds = Some(vec![feed("hn", "Hacker News")]);
    dashboard.tags = Some(vec![tag("t1", "One")]);

    let trail = dashboard.breadcrumb();
    let labels = trail.labels();
    assert_eq!(labels.first(), Some(&"Home"));
    assert_eq!(labels.last(), Some(&"Recently Read"));
    let tag_pos = labels.iter().position(|l| *l == "One").unwrap();
    let feed_pos = labels.iter().position(|l| *l == "Hacker News").unwrap();
    assert!(tag_pos < feed_pos);
}

#[test]
fn picking_feed_and_tag_from_loaded_collections() {
    let mut dashboard = Dashboard::open("/?tag=Technology&article=3");
    dashboard.feeds = Some(vec![feed("hn", "Hacker News")]);
    dashboard.tags = Some(vec![tag("tech", "Technology")]);

    // A picker offers canonical ids; choosing one replaces the legacy name.
    let picked = dashboard.tags.as_ref().unwrap()[0].id.clone();
    assert!(dashboard.store.set_tag(Some(picked)));
    let slug = dashboard.feeds.as_ref().unwrap()[0].slug.clone();
    assert!(dashboard.store.set_feed(slug));

    assert_eq!(dashboard.store.backend().current(), "/?tag=tech&article=3&feed=hn");
    assert_eq!(
        dashboard.breadcrumb().labels(),
        vec!["Home", "Technology", "Hacker News", "All Articles"]
    );
    assert!(dashboard.overlay().is_open());

    // The "all" option writes an empty value, which removes the key.
    assert!(dashboard.store.set_tag(Some("")));
    assert!(dashboard.store.set_feed(""));
    assert_eq!(dashboard.store.backend().current(), "/?article=3");
}
