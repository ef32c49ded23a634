//! Application configuration.
//!
//! Tunables live in `assets/dashboard.toml`, embedded at compile time with
//! `include_str!`. Constants that are not worth exposing stay here.

use readboard_core::DashboardConfig;

use crate::utils::log;

// =============================================================================
// Embedded Assets
// =============================================================================

/// Dashboard configuration document.
pub const DASHBOARD_TOML: &str = include_str!("../assets/dashboard.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name shown in the landing header.
pub const APP_NAME: &str = "Read";

/// Title of the reader panel.
pub const READER_TITLE: &str = "Reader";

// =============================================================================
// UI Configuration
// =============================================================================

/// Landing header switches to its compact style past this scroll offset.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Placeholder rows shown while the article list loads.
pub const SKELETON_ROWS: usize = 10;

/// CSS selector focused when the reader closes.
pub const LIST_FOCUS_SELECTOR: &str = "main";

/// Icon theme selection.
///
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Dashboard Configuration
// =============================================================================

/// Load the embedded dashboard configuration.
///
/// An invalid document is reported to the console and replaced by defaults;
/// it never stops the app from starting.
pub fn dashboard_config() -> DashboardConfig {
    DashboardConfig::from_toml(DASHBOARD_TOML).unwrap_or_else(|err| {
        log::warn(&format!("dashboard.toml: {}, using defaults", err));
        DashboardConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = DashboardConfig::from_toml(DASHBOARD_TOML).unwrap();
        assert_eq!(config.api.feeds_per_page, 100);
        assert_eq!(config.layout.mobile_breakpoint_px, 768);
        assert!(config.refresh.enabled);
    }
}
