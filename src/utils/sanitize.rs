//! Article body sanitization.

/// Clean untrusted article HTML before it is injected into the reader.
///
/// Uses `ammonia`'s default allow-list (scripts, event handlers and
/// `javascript:` URLs are stripped) and forces `rel="noopener noreferrer"`
/// on every link.
pub fn sanitize_article_html(html: &str) -> String {
    ammonia::Builder::default()
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}
