//! Records served by the feed API.
//!
//! These are owned by the data client's cache. The navigation controller only
//! ever borrows them.

use serde::{Deserialize, Serialize};

/// A subscribed feed. `slug` is unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub slug: String,
    pub title: String,
}

/// A user tag. Both `id` and `name` are expected to be unique, but nothing
/// here enforces it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// One row of the article list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub feed_title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// A full article as shown in the reader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Untrusted HTML body.
    #[serde(default)]
    pub content: String,
}
