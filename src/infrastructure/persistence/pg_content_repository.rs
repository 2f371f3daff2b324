//! PostgreSQL implementation of the content repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url::Url;

use crate::domain::entities::ContentItem;
use crate::domain::repositories::{ContentRepository, PageOrder, PageQuery};
use crate::error::RepositoryError;

/// Row shape of `content_items` as read by the scanner.
#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    body: String,
    author_id: Option<i64>,
    published_at: DateTime<Utc>,
}

impl From<ContentRow> for ContentItem {
    fn from(row: ContentRow) -> Self {
        ContentItem::new(row.id, row.title, row.body, row.author_id, row.published_at)
    }
}

/// PostgreSQL repository for content items.
///
/// Pages are read with `LIMIT`/`OFFSET` and never counted. Date bounds are
/// bound as UTC instants, independent of the session `TimeZone`. Queries are
/// checked at runtime so the crate builds without a database.
pub struct PgContentRepository {
    pool: Arc<PgPool>,
    site_url: Url,
}

impl PgContentRepository {
    /// Creates a new repository with a database connection pool.
    ///
    /// `site_url` is the base permalinks are resolved against.
    pub fn new(pool: Arc<PgPool>, site_url: Url) -> Self {
        Self { pool, site_url }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<ContentItem>, RepositoryError> {
        let order_by = match query.order {
            PageOrder::PublishedDesc => "published_at DESC",
        };
        let sql = format!(
            r#"
            SELECT id, title, body, author_id, published_at
            FROM content_items
            WHERE content_type = $1
              AND status = $2
              AND published_at >= $3
              AND published_at < $4
            ORDER BY {order_by}
            LIMIT $5 OFFSET $6
            "#
        );

        let (published_from, published_until) = query.published_range();

        tracing::debug!(
            page = query.page,
            limit = query.page_size.get(),
            offset = query.offset(),
            "Querying content page"
        );

        let rows = sqlx::query_as::<_, ContentRow>(&sql)
            .bind(&query.content_type)
            .bind(query.status.as_str())
            .bind(published_from)
            .bind(published_until)
            .bind(i64::from(query.page_size.get()))
            .bind(i64::try_from(query.offset()).unwrap_or(i64::MAX))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ContentItem::from).collect())
    }

    async fn resolve_author_display_name(&self, author_id: i64) -> Result<String, RepositoryError> {
        let name = sqlx::query_scalar::<_, String>("SELECT display_name FROM authors WHERE id = $1")
            .bind(author_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(name.unwrap_or_default())
    }

    async fn resolve_permalink(&self, item_id: i64) -> Result<String, RepositoryError> {
        let slug = sqlx::query_scalar::<_, Option<String>>("SELECT slug FROM content_items WHERE id = $1")
            .bind(item_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .flatten();

        build_permalink(&self.site_url, item_id, slug.as_deref())
    }
}

/// Builds `<site>/<slug>/`, or `<site>?p=<id>` when the item has no slug.
///
/// # Errors
///
/// Returns [`RepositoryError::InvalidPermalink`] if the slug would leave the
/// site's origin or cannot be joined.
fn build_permalink(site_url: &Url, item_id: i64, slug: Option<&str>) -> Result<String, RepositoryError> {
    let invalid = |reason: String| RepositoryError::InvalidPermalink { id: item_id, reason };

    match slug.map(|s| s.trim_matches('/')).filter(|s| !s.is_empty()) {
        Some(slug) => {
            let url = site_url
                .join(&format!("{slug}/"))
                .map_err(|e| invalid(e.to_string()))?;
            if url.origin() != site_url.origin() {
                return Err(invalid(format!("slug '{slug}' points outside {site_url}")));
            }
            Ok(url.to_string())
        }
        None => {
            let mut url = site_url.clone();
            url.set_query(Some(&format!("p={item_id}")));
            Ok(url.to_string())
        }
    }
}
