//! Content item entity as handed out by the repository.

use chrono::{DateTime, Utc};

/// A single published unit of content.
///
/// Owned by the repository; the scanner only reads it. The permalink is not
/// part of the row and is resolved lazily for matching items only, see
/// [`ContentRepository::resolve_permalink`](crate::domain::repositories::ContentRepository::resolve_permalink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    /// Raw body text, may contain markup.
    pub body: String,
    pub author_id: Option<i64>,
    pub published_at: DateTime<Utc>,
}

impl ContentItem {
    /// Creates a new ContentItem instance.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: Option<i64>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author_id,
            published_at,
        }
    }
}
