//! The query-state store: every URL write goes through here.
//!
//! [`QueryStore`] keeps the parsed search parameters of the current location
//! and turns [`NavigationPatch`]es into history entries on a
//! [`HistoryBackend`]. One patch is one URL transition, and a patch that
//! leaves the URL as it was writes nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::query::{FilterKind, NavigationPatch, NavigationState, QueryParams};

/// How a URL change is recorded in session history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// `history.replaceState` (default)
    #[default]
    Replace,
    /// `history.pushState`
    Push,
}

/// Access to the location and session history of the hosting page.
pub trait HistoryBackend {
    /// Path of the current location, e.g. `/`.
    fn pathname(&self) -> String;

    /// Search string of the current location, with or without the leading `?`.
    fn search(&self) -> String;

    /// Navigate to `url` (path plus query) without reloading the page.
    fn write(&mut self, url: &str, mode: HistoryMode);
}

/// Build `pathname?query`, or just `pathname` when there are no parameters.
pub fn format_url(pathname: &str, params: &QueryParams) -> String {
    let pathname = if pathname.is_empty() { "/" } else { pathname };
    if params.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, params.to_query_string())
    }
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// In-process session history.
///
/// Behaves like a browser tab's history stack: pushing truncates any forward
/// entries, replacing rewrites the current entry.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Start with a single entry at `url` (e.g. `/?filter=unread`).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entries: vec![url.into()],
            index: 0,
        }
    }

    /// Current URL.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Step back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    fn split_current(&self) -> (&str, &str) {
        let url = self.current();
        url.split_once('?').unwrap_or((url, ""))
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryBackend for MemoryHistory {
    fn pathname(&self) -> String {
        self.split_current().0.to_string()
    }

    fn search(&self) -> String {
        self.split_current().1.to_string()
    }

    fn write(&mut self, url: &str, mode: HistoryMode) {
        match mode {
            HistoryMode::Replace => self.entries[self.index] = url.to_string(),
            HistoryMode::Push => {
                self.entries.truncate(self.index + 1);
                self.entries.push(url.to_string());
                self.index += 1;
            }
        }
    }
}

// ============================================================================
// QueryStore
// ============================================================================

/// Typed, bidirectional binding between the URL and [`NavigationState`].
#[derive(Debug)]
pub struct QueryStore<B> {
    backend: B,
    params: QueryParams,
    mode: HistoryMode,
}

impl<B: HistoryBackend> QueryStore<B> {
    /// Create a store reading the backend's current location.
    pub fn new(backend: B, mode: HistoryMode) -> Self {
        let params = QueryParams::parse(&backend.search());
        Self {
            backend,
            params,
            mode,
        }
    }

    /// Current navigation state, parsed from the URL.
    pub fn state(&self) -> NavigationState {
        NavigationState::from_params(&self.params)
    }

    /// Raw parameters, including ones the dashboard does not track.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// URL of the current location.
    pub fn href(&self) -> String {
        format_url(&self.backend.pathname(), &self.params)
    }

    /// Apply several key changes as one URL transition.
    ///
    /// Returns `true` if the URL changed.
    pub fn update(&mut self, build: impl FnOnce(&mut NavigationPatch)) -> bool {
        let mut patch = NavigationPatch::new();
        build(&mut patch);
        self.commit(&patch)
    }

    /// Apply a prepared patch. Returns `true` if the URL changed.
    pub fn commit(&mut self, patch: &NavigationPatch) -> bool {
        if patch.is_empty() {
            return false;
        }

        let next = self.params.apply(patch);
        if next == self.params {
            return false;
        }

        let url = format_url(&self.backend.pathname(), &next);
        debug!(%url, mode = ?self.mode, "navigation: url transition");
        self.backend.write(&url, self.mode);
        self.params = next;
        true
    }

    /// Move to `state` as a whole, as following a link would. Keys absent
    /// from `state` are removed.
    pub fn navigate(&mut self, state: &NavigationState) -> bool {
        self.commit(&state.to_patch())
    }

    pub fn set_filter(&mut self, filter: FilterKind) -> bool {
        self.update(|p| {
            p.set_filter(filter);
        })
    }

    /// An empty slug clears the feed filter.
    pub fn set_feed(&mut self, slug: impl Into<String>) -> bool {
        self.update(|p| {
            p.set_feed(slug);
        })
    }

    pub fn set_tag<S: Into<String>>(&mut self, tag: Option<S>) -> bool {
        self.update(|p| {
            p.set_tag(tag);
        })
    }

    pub fn set_selected_article<S: Into<String>>(&mut self, article: Option<S>) -> bool {
        self.update(|p| {
            p.set_article(article);
        })
    }

    /// Re-read the backend after navigation the store did not perform
    /// (back/forward buttons, links).
    ///
    /// Returns `true` if the navigation state changed.
    pub fn sync(&mut self) -> bool {
        let before = self.state();
        self.params = QueryParams::parse(&self.backend.search());
        let changed = self.state() != before;
        if changed {
            debug!(href = %self.href(), "navigation: synced from history");
        }
        changed
    }
}
