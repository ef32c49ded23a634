//! Utility modules for web, DOM, and content operations.
//!
//! Provides:
//! - [`dom`] - window, location and history access
//! - [`fetch_json`] - JSON fetching with timeout
//! - [`log`] - browser console logging
//! - [`sanitize_article_html`] - XSS sanitization of article bodies

pub mod dom;
mod fetch;
pub mod log;
mod sanitize;

pub use fetch::fetch_json;
pub use sanitize::sanitize_article_html;
