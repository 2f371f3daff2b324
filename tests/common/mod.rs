#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use marker_scan::domain::entities::ContentItem;
use marker_scan::domain::repositories::{ContentRepository, PageQuery};
use marker_scan::error::RepositoryError;

pub const MARKED_BODY: &str = "<p>Intro</p><!-- wp:dmg/read-more {\"postId\":12} /--><p>More</p>";
pub const RENDERED_BODY: &str = "<p class=\"dmg-read-more\">Read More: <a href=\"/x/\">X</a></p>";
pub const PLAIN_BODY: &str = "<p>Nothing to see here</p>";

pub const SITE: &str = "https://example.com";

/// Stored item plus the filter columns the pre-filter looks at.
#[derive(Debug, Clone)]
pub struct StoredItem {
    pub item: ContentItem,
    pub content_type: String,
    pub status: String,
}

/// Content store kept in memory, honouring the page filter the way the
/// PostgreSQL repository does.
#[derive(Default)]
pub struct InMemoryContentRepository {
    items: Mutex<Vec<StoredItem>>,
    authors: HashMap<i64, String>,
    fetches: AtomicUsize,
    author_lookups: AtomicUsize,
    permalink_lookups: AtomicUsize,
    queries: Mutex<Vec<PageQuery>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, id: i64, name: &str) -> Self {
        self.authors.insert(id, name.to_string());
        self
    }

    pub fn insert(&self, item: ContentItem) {
        self.insert_with(item, "post", "publish");
    }

    pub fn insert_with(&self, item: ContentItem, content_type: &str, status: &str) {
        self.items.lock().unwrap().push(StoredItem {
            item,
            content_type: content_type.to_string(),
            status: status.to_string(),
        });
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn author_lookups(&self) -> usize {
        self.author_lookups.load(Ordering::SeqCst)
    }

    pub fn permalink_lookups(&self) -> usize {
        self.permalink_lookups.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<ContentItem>, RepositoryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        let mut matching: Vec<ContentItem> = self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.content_type == query.content_type && s.status == query.status.as_str())
            .filter(|s| {
                let (from, until) = query.published_range();
                s.item.published_at >= from && s.item.published_at < until
            })
            .map(|s| s.item.clone())
            .collect();

        // Stable sort keeps insertion order for equal timestamps.
        matching.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Ok(matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size.get() as usize)
            .collect())
    }

    async fn resolve_author_display_name(&self, author_id: i64) -> Result<String, RepositoryError> {
        self.author_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.authors.get(&author_id).cloned().unwrap_or_default())
    }

    async fn resolve_permalink(&self, item_id: i64) -> Result<String, RepositoryError> {
        self.permalink_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{SITE}/?p={item_id}"))
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at_noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// Inserts `count` items published on consecutive seconds after `published`,
/// the first `marked` of which carry the block marker.
pub fn seed(repo: &InMemoryContentRepository, count: i64, marked: i64, published: DateTime<Utc>) {
    for id in 1..=count {
        let body = if id <= marked { MARKED_BODY } else { PLAIN_BODY };
        let published_at = published + chrono::Duration::seconds(id);
        repo.insert(ContentItem::new(id, format!("Item {id}"), body, Some(1), published_at));
    }
}
