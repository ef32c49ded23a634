//! Reader overlay state.
//!
//! Whether the reader is open is not stored anywhere: it is read off the
//! `article` parameter every time. The only way to close the overlay is to
//! clear that parameter through the query store, so "overlay open" and
//! "article selected" cannot disagree.

use crate::config::LayoutConfig;
use crate::query::{NavigationPatch, NavigationState};

/// Responsive viewport class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    /// Phone-sized
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    pub fn from_narrow(is_narrow: bool) -> Self {
        if is_narrow { Self::Narrow } else { Self::Wide }
    }

    /// Narrow iff `width_px` is below `breakpoint_px`.
    pub fn from_width(width_px: f64, breakpoint_px: u32) -> Self {
        Self::from_narrow(width_px < f64::from(breakpoint_px))
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}

/// How the reader panel is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReaderLayout {
    /// Side panel on the right, fixed fraction of viewport width.
    Inline,
    /// Bottom-anchored sheet, capped fraction of viewport height.
    Sheet,
}

impl ReaderLayout {
    pub fn for_viewport(viewport: Viewport) -> Self {
        match viewport {
            Viewport::Narrow => Self::Sheet,
            Viewport::Wide => Self::Inline,
        }
    }

    /// Edge of the viewport the panel is anchored to.
    pub fn side(self) -> &'static str {
        match self {
            Self::Inline => "right",
            Self::Sheet => "bottom",
        }
    }

    /// Inline CSS sizing the panel.
    pub fn panel_style(self, layout: &LayoutConfig) -> String {
        match self {
            Self::Inline => format!("width: {}vw;", layout.inline_width_vw),
            Self::Sheet => format!("max-height: {}vh;", layout.sheet_max_height_vh),
        }
    }
}

/// The reader overlay: closed, or open in some layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(ReaderLayout),
}

impl OverlayState {
    /// Open iff an article id is present and non-empty.
    pub fn derive(selected_article_id: Option<&str>, viewport: Viewport) -> Self {
        match selected_article_id {
            Some(id) if !id.is_empty() => Self::Open(ReaderLayout::for_viewport(viewport)),
            _ => Self::Closed,
        }
    }

    pub fn from_state(state: &NavigationState, viewport: Viewport) -> Self {
        Self::derive(state.selected_article_id.as_deref(), viewport)
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn layout(self) -> Option<ReaderLayout> {
        match self {
            Self::Open(layout) => Some(layout),
            Self::Closed => None,
        }
    }
}

/// Patch that closes the reader.
pub fn dismiss_patch() -> NavigationPatch {
    let mut patch = NavigationPatch::new();
    patch.clear_article();
    patch
}

/// React to the overlay widget asking to change its open state.
///
/// Only a close request produces a write; opening happens by selecting an
/// article, never from the widget.
pub fn on_open_change(open: bool) -> Option<NavigationPatch> {
    (!open).then(dismiss_patch)
}

/// Observable change between two overlay states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Opened(ReaderLayout),
    Closed,
    /// Still open, different layout (viewport crossed the breakpoint).
    Relayout(ReaderLayout),
}

impl OverlayTransition {
    pub fn between(prev: OverlayState, next: OverlayState) -> Option<Self> {
        match (prev, next) {
            (OverlayState::Closed, OverlayState::Open(layout)) => Some(Self::Opened(layout)),
            (OverlayState::Open(_), OverlayState::Closed) => Some(Self::Closed),
            (OverlayState::Open(a), OverlayState::Open(b)) if a != b => Some(Self::Relayout(b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryKey;

    #[test]
    fn test_open_iff_article_present() {
        assert_eq!(OverlayState::derive(None, Viewport::Wide), OverlayState::Closed);
        assert_eq!(OverlayState::derive(Some(""), Viewport::Wide), OverlayState::Closed);
        assert_eq!(
            OverlayState::derive(Some("42"), Viewport::Wide),
            OverlayState::Open(ReaderLayout::Inline)
        );
        assert_eq!(
            OverlayState::derive(Some("42"), Viewport::Narrow),
            OverlayState::Open(ReaderLayout::Sheet)
        );
    }

    #[test]
    fn test_from_state() {
        let state = NavigationState::default().with_article("9");
        assert!(OverlayState::from_state(&state, Viewport::Wide).is_open());
        assert!(!OverlayState::from_state(&NavigationState::default(), Viewport::Narrow).is_open());
    }

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(Viewport::from_width(767.0, 768), Viewport::Narrow);
        assert_eq!(Viewport::from_width(768.0, 768), Viewport::Wide);
    }

    #[test]
    fn test_dismiss_clears_article_only() {
        let patch = dismiss_patch();
        let changes: Vec<_> = patch.changes().cloned().collect();
        assert_eq!(changes, vec![(QueryKey::Article, None)]);

        assert!(on_open_change(true).is_none());
        assert_eq!(on_open_change(false), Some(dismiss_patch()));
    }

    #[test]
    fn test_transitions() {
        let inline = OverlayState::Open(ReaderLayout::Inline);
        let sheet = OverlayState::Open(ReaderLayout::Sheet);

        assert_eq!(
            OverlayTransition::between(OverlayState::Closed, inline),
            Some(OverlayTransition::Opened(ReaderLayout::Inline))
        );
        assert_eq!(
            OverlayTransition::between(inline, sheet),
            Some(OverlayTransition::Relayout(ReaderLayout::Sheet))
        );
        assert_eq!(
            OverlayTransition::between(sheet, OverlayState::Closed),
            Some(OverlayTransition::Closed)
        );
        assert_eq!(OverlayTransition::between(sheet, sheet), None);
    }

    #[test]
    fn test_panel_style() {
        let layout = LayoutConfig::default();
        assert_eq!(ReaderLayout::Sheet.panel_style(&layout), "max-height: 85vh;");
        assert_eq!(ReaderLayout::Inline.panel_style(&layout), "width: 70vw;");
        assert_eq!(ReaderLayout::Sheet.side(), "bottom");
    }
}
