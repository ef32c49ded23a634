//! Dashboard configuration.
//!
//! Loaded from TOML; every field has a default so an empty document is a
//! valid configuration.
//!
//! ```toml
//! [api]
//! base_url = "/api"
//! feeds_per_page = 100
//!
//! [refresh]
//! interval_secs = 300
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::refresh::RefreshPolicy;
use crate::store::HistoryMode;

/// Feed API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for every API request, without trailing slash.
    pub base_url: String,
    /// Page size used to approximate "all feeds" in one request.
    pub feeds_per_page: u32,
    /// Request timeout in milliseconds.
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            feeds_per_page: 100,
            timeout_ms: 10_000,
        }
    }
}

/// URL write behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub history: HistoryMode,
}

/// Reader panel geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this use the bottom sheet.
    pub mobile_breakpoint_px: u32,
    /// Sheet height cap, percent of viewport height.
    pub sheet_max_height_vh: u8,
    /// Side panel width, percent of viewport width.
    pub inline_width_vw: u8,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            sheet_max_height_vh: 85,
            inline_width_vw: 70,
        }
    }
}

impl LayoutConfig {
    /// Media query matching narrow viewports.
    pub fn narrow_media_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_breakpoint_px.saturating_sub(1))
    }
}

/// Complete dashboard configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
    pub layout: LayoutConfig,
    pub refresh: RefreshPolicy,
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> ConfigError {
            ConfigError::InvalidValue {
                field,
                reason: reason.to_string(),
            }
        }

        if self.api.feeds_per_page == 0 {
            return Err(invalid("api.feeds_per_page", "must be greater than zero"));
        }
        if self.api.timeout_ms == 0 {
            return Err(invalid("api.timeout_ms", "must be greater than zero"));
        }
        if self.layout.mobile_breakpoint_px == 0 {
            return Err(invalid("layout.mobile_breakpoint_px", "must be greater than zero"));
        }
        for (field, value) in [
            ("layout.sheet_max_height_vh", self.layout.sheet_max_height_vh),
            ("layout.inline_width_vw", self.layout.inline_width_vw),
        ] {
            if !(1..=100).contains(&value) {
                return Err(invalid(field, "must be between 1 and 100"));
            }
        }
        if self.refresh.enabled && self.refresh.interval_secs == 0 {
            return Err(invalid("refresh.interval_secs", "must be greater than zero"));
        }
        Ok(())
    }
}
