//! URL-backed navigation state.
//!
//! [`NavigationContext`] wraps the core [`QueryStore`] around the browser's
//! `window.history`. The reactive `state` signal is a read-only mirror of the
//! URL: it is written only after the store has committed a URL transition or
//! picked up a back/forward navigation, never directly by components.

use leptos::prelude::*;
use readboard_core::overlay;
use readboard_core::{
    FilterKind, HistoryBackend, HistoryMode, NavigationPatch, NavigationState, QueryStore,
};

use crate::utils::{dom, log};

/// [`HistoryBackend`] over the page's location and session history.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl HistoryBackend for BrowserHistory {
    fn pathname(&self) -> String {
        dom::location_pathname()
    }

    fn search(&self) -> String {
        dom::location_search()
    }

    fn write(&mut self, url: &str, mode: HistoryMode) {
        match mode {
            HistoryMode::Replace => dom::replace_url(url),
            HistoryMode::Push => dom::push_url(url),
        }
    }
}

/// Read and write access to the navigation state.
///
/// This struct is `Copy`: both fields are arena handles.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    store: StoredValue<QueryStore<BrowserHistory>>,
    state: RwSignal<NavigationState>,
}

impl NavigationContext {
    /// Bind to the current page location.
    pub fn new(mode: HistoryMode) -> Self {
        let store = QueryStore::new(BrowserHistory, mode);
        let state = RwSignal::new(store.state());
        Self {
            store: StoredValue::new(store),
            state,
        }
    }

    /// Current navigation state (tracked).
    pub fn navigation_state(&self) -> NavigationState {
        self.state.get()
    }

    /// Borrow the current navigation state (tracked).
    pub fn with<R>(&self, f: impl FnOnce(&NavigationState) -> R) -> R {
        self.state.with(f)
    }

    /// Apply several key changes as one URL transition.
    pub fn update(&self, build: impl FnOnce(&mut NavigationPatch)) {
        let mut patch = NavigationPatch::new();
        build(&mut patch);
        self.commit(&patch);
    }

    pub fn commit(&self, patch: &NavigationPatch) {
        let changed = self
            .store
            .try_update_value(|store| store.commit(patch))
            .unwrap_or(false);
        if changed {
            self.publish();
        }
    }

    /// Move to `target` as a whole, as following an internal link would.
    pub fn navigate(&self, target: &NavigationState) {
        let changed = self
            .store
            .try_update_value(|store| store.navigate(target))
            .unwrap_or(false);
        if changed {
            self.publish();
        }
    }

    pub fn set_filter(&self, filter: FilterKind) {
        self.update(|p| {
            p.set_filter(filter);
        });
    }

    pub fn set_feed(&self, slug: impl Into<String>) {
        self.update(|p| {
            p.set_feed(slug);
        });
    }

    pub fn set_tag<S: Into<String>>(&self, tag: Option<S>) {
        self.update(|p| {
            p.set_tag(tag);
        });
    }

    pub fn set_selected_article<S: Into<String>>(&self, article: Option<S>) {
        self.update(|p| {
            p.set_article(article);
        });
    }

    /// Close the reader by clearing `article`.
    pub fn close_overlay(&self) {
        self.commit(&overlay::dismiss_patch());
    }

    /// Pick up a navigation the store did not make (back/forward).
    pub fn sync(&self) {
        let changed = self
            .store
            .try_update_value(|store| store.sync())
            .unwrap_or(false);
        if changed {
            self.publish();
        }
    }

    /// Re-sync on `popstate` for as long as the calling owner lives.
    pub fn listen_history(&self) {
        let ctx = *self;
        let handle = window_event_listener(leptos::ev::popstate, move |_| ctx.sync());
        on_cleanup(move || handle.remove());
    }

    fn publish(&self) {
        let Some(next) = self.store.try_with_value(|store| store.state()) else {
            return;
        };
        if self.state.with_untracked(|current| *current != next) {
            log::debug(&format!(
                "navigation: {}",
                self.store
                    .try_with_value(|store| store.href())
                    .unwrap_or_default()
            ));
            self.state.set(next);
        }
    }
}
