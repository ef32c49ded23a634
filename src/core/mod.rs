//! Browser-side controller: URL binding, data client and timers.
//!
//! - [`navigation`] - [`NavigationContext`], the reactive query-state store
//! - [`client`] - [`QueryClient`] and the API endpoints
//! - [`controller`] - [`use_navigation_controller`] for the dashboard page
//! - [`refresh`] - [`use_auto_refresh`] background refresh timer

pub mod client;
pub mod controller;
pub mod navigation;
pub mod refresh;

pub use client::QueryClient;
pub use controller::{NavigationController, use_navigation_controller};
pub use navigation::NavigationContext;
pub use refresh::use_auto_refresh;
