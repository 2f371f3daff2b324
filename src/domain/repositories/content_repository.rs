//! Repository trait for paginated content retrieval.

use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use std::num::NonZeroU32;

use crate::domain::entities::{ContentItem, ScanRequest};
use crate::error::RepositoryError;

/// Publication status used by the pre-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    Published,
}

impl ContentStatus {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Published => "publish",
        }
    }
}

/// Ordering applied to a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrder {
    /// Newest first; ties keep the store's native order.
    PublishedDesc,
}

/// Server-side pre-filter for one page.
///
/// Must only ever narrow to a superset of what the marker test would accept.
/// Both date bounds are inclusive calendar days in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub content_type: String,
    pub status: ContentStatus,
    pub date_after: NaiveDate,
    pub date_before: NaiveDate,
    /// 1-indexed page number.
    pub page: u32,
    pub page_size: NonZeroU32,
    pub order: PageOrder,
}

impl PageQuery {
    /// Builds the query for page `page` of a scan run.
    pub fn for_request(request: &ScanRequest, content_type: &str, page: u32) -> Self {
        Self {
            content_type: content_type.to_string(),
            status: ContentStatus::Published,
            date_after: request.date_after(),
            date_before: request.date_before(),
            page,
            page_size: request.page_size(),
            order: PageOrder::PublishedDesc,
        }
    }

    /// Half-open UTC range `[date_after 00:00, date_before + 1 day 00:00)`
    /// covering both bounds as whole days.
    pub fn published_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.date_after.and_time(NaiveTime::MIN).and_utc();
        let end = self
            .date_before
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN)
            .and_utc();
        (start, end)
    }

    /// Number of rows preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size.get())
    }
}

/// Content store consumed by the scanner.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContentRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::retry::RetryingContentRepository`] - retry decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetches one page of items matching the pre-filter.
    ///
    /// Returns at most `query.page_size` items. No total count is computed;
    /// an empty result means there is no more data.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the store cannot be queried.
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<ContentItem>, RepositoryError>;

    /// Resolves an author's display name. Unknown authors yield an empty string.
    ///
    /// Only called for matching items.
    async fn resolve_author_display_name(&self, author_id: i64) -> Result<String, RepositoryError>;

    /// Resolves the public URL of an item.
    ///
    /// Only called for matching items.
    async fn resolve_permalink(&self, item_id: i64) -> Result<String, RepositoryError>;
}
