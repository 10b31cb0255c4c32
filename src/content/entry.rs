//! Blog post models

use serde::Serialize;
use std::borrow::Cow;

/// A single blog post: metadata plus a renderable body.
#[derive(Debug, Clone, Serialize)]
pub struct ContentEntry {
    /// Display title
    pub title: String,

    /// Short summary shown on listing cards
    pub description: String,

    /// URL-safe identifier, unique within its category
    pub slug: String,

    /// Human-readable publication label (e.g. "August 2025").
    /// Free-form text, never parsed or sorted on.
    pub published: String,

    /// The post body. Opaque to the registry; only the presentation
    /// layer renders it.
    #[serde(skip)]
    pub body: PostBody,
}

impl ContentEntry {
    /// Create an entry. Bodies are usually embedded markdown via `include_str!`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        slug: impl Into<String>,
        published: impl Into<String>,
        body: PostBody,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            slug: slug.into(),
            published: published.into(),
            body,
        }
    }
}

/// An opaque renderable post body.
///
/// Holds markdown source, typically a `&'static str` embedded at compile
/// time. The registry stores it and hands back references; rendering to
/// HTML happens in the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct PostBody {
    markdown: Cow<'static, str>,
}

impl PostBody {
    /// Wrap embedded markdown source
    pub const fn from_markdown(markdown: &'static str) -> Self {
        Self {
            markdown: Cow::Borrowed(markdown),
        }
    }

    /// Wrap owned markdown source
    pub fn from_owned(markdown: String) -> Self {
        Self {
            markdown: Cow::Owned(markdown),
        }
    }

    /// The raw markdown source
    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_opaque_passthrough() {
        let body = PostBody::from_markdown("# Hello\n\nworld");
        assert_eq!(body.markdown(), "# Hello\n\nworld");

        let owned = PostBody::from_owned("content".to_string());
        assert_eq!(owned.markdown(), "content");
    }

    #[test]
    fn test_entry_fields() {
        let entry = ContentEntry::new(
            "A Title",
            "A description.",
            "a-title",
            "May 2025",
            PostBody::from_markdown("body"),
        );
        assert_eq!(entry.title, "A Title");
        assert_eq!(entry.slug, "a-title");
        assert_eq!(entry.published, "May 2025");
    }
}
