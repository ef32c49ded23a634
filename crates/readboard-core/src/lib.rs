//! Navigation and read-state controller for the readboard dashboard.
//!
//! The URL query string is the single source of truth. This crate holds the
//! platform-independent half of the controller:
//!
//! - [`query`] - [`FilterKind`], [`NavigationState`] and the query codec
//! - [`store`] - [`QueryStore`], the single write funnel over a [`HistoryBackend`]
//! - [`resolve`] - joins URL keys against loaded [`Feed`] and [`Tag`] collections
//! - [`breadcrumb`] - filter labels and the [`BreadcrumbTrail`]
//! - [`overlay`] - reader overlay state derived from the selected article
//! - [`refresh`] - background refresh scheduling
//! - [`cache`] - generation and in-flight bookkeeping for list queries
//! - [`config`] - [`DashboardConfig`] loaded from TOML

pub mod breadcrumb;
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod overlay;
pub mod query;
pub mod refresh;
pub mod resolve;
pub mod store;

pub use breadcrumb::{BreadcrumbTrail, Crumb, breadcrumb_href, breadcrumb_trail, filter_label};
pub use cache::{CacheKey, QueryCache};
pub use config::DashboardConfig;
pub use error::{ConfigError, FetchError};
pub use model::{Article, ArticleSummary, Feed, Tag};
pub use overlay::{OverlayState, OverlayTransition, ReaderLayout, Viewport};
pub use query::{FilterKind, NavigationPatch, NavigationState, QueryKey, QueryParams};
pub use refresh::{RefreshDecision, RefreshPolicy, RefreshScheduler, SkipReason};
pub use resolve::{ResolvedSelection, resolve, resolve_state};
pub use store::{HistoryBackend, HistoryMode, MemoryHistory, QueryStore};
