//! UI components built with Leptos.
//!
//! - [`dashboard`] - Breadcrumb, filter tabs, article list and reader overlay
//! - [`landing`] - Landing page and its scroll-aware header
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dashboard;
pub mod icons;
pub mod landing;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
