//! Batch scanning over the paginated content repository.

use async_stream::try_stream;
use futures::{Stream, TryStreamExt, pin_mut};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::entities::{ContentItem, MatchRecord, ScanProgress, ScanRequest};
use crate::domain::matcher::MarkerMatcher;
use crate::domain::repositories::{ContentRepository, PageQuery};
use crate::error::RepositoryError;
use crate::utils::date_format::DisplayFormat;
use crate::utils::markup::strip_tags;

/// Content type scanned when none is configured.
pub const DEFAULT_CONTENT_TYPE: &str = "post";

/// Result of processing one page.
#[derive(Debug, Clone)]
pub struct ScanBatch {
    /// Counters after this batch; `current_batch_size` is the page's size.
    pub progress: ScanProgress,
    pub batch_matched: usize,
    pub matches: Vec<MatchRecord>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub progress: ScanProgress,
    pub matches: Vec<MatchRecord>,
}

/// Drives a scan run: pages through the repository, applies the marker test
/// and builds a [`MatchRecord`] for every hit.
///
/// Pages are fetched one at a time and fully processed before the next
/// request. The run ends on an empty page, or right after a page shorter than
/// the requested page size. A dataset whose size is an exact multiple of the
/// page size therefore costs one extra, empty fetch; no total count is ever
/// requested.
pub struct BatchScanner<R: ContentRepository> {
    repository: Arc<R>,
    matcher: MarkerMatcher,
    content_type: String,
    date_format: DisplayFormat,
}

impl<R: ContentRepository> BatchScanner<R> {
    /// Creates a scanner over `repository` using the default content type and
    /// date display format.
    pub fn new(repository: Arc<R>, matcher: MarkerMatcher) -> Self {
        Self {
            repository,
            matcher,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            date_format: DisplayFormat::default(),
        }
    }

    /// Sets the content type passed to the pre-filter.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the format used for [`MatchRecord::date`].
    pub fn with_date_format(mut self, date_format: DisplayFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// Starts a run and returns it as a lazy stream of batches.
    ///
    /// One item is yielded per non-empty page, in page order. The stream is
    /// finite and cannot be restarted; call `scan` again for a new run.
    ///
    /// # Errors
    ///
    /// The first [`RepositoryError`] is yielded as-is and ends the stream.
    pub fn scan<'a>(
        &'a self,
        request: &'a ScanRequest,
    ) -> impl Stream<Item = Result<ScanBatch, RepositoryError>> + 'a {
        try_stream! {
            let page_size = request.page_size().get() as usize;
            let mut progress = ScanProgress::new();

            while !progress.done {
                let query = PageQuery::for_request(request, &self.content_type, progress.page_number);
                debug!(
                    page = query.page,
                    page_size,
                    date_after = %query.date_after,
                    date_before = %query.date_before,
                    "Fetching page"
                );

                let items = self.repository.fetch_page(&query).await?;
                if items.is_empty() {
                    debug!(page = query.page, "Empty page, scan complete");
                    progress.done = true;
                    break;
                }

                progress.current_batch_size = items.len();
                if items.len() < page_size {
                    progress.done = true;
                }

                let mut matches = Vec::new();
                for item in items.iter().filter(|item| self.matcher.is_match(&item.body)) {
                    matches.push(self.build_record(item).await?);
                }

                progress.total_processed += items.len() as u64;
                progress.total_matched += matches.len() as u64;

                info!(
                    page = progress.page_number,
                    batch_size = progress.current_batch_size,
                    batch_matched = matches.len(),
                    total_processed = progress.total_processed,
                    total_matched = progress.total_matched,
                    "Batch complete"
                );

                let batch = ScanBatch {
                    progress: progress.clone(),
                    batch_matched: matches.len(),
                    matches,
                };
                progress.page_number += 1;

                yield batch;
            }
        }
    }

    /// Runs a scan to completion.
    ///
    /// `on_batch` sees every batch before its matches are accumulated, which
    /// is where callers report progress.
    ///
    /// # Errors
    ///
    /// Returns the first [`RepositoryError`]; matches collected so far are
    /// discarded.
    pub async fn run<F>(&self, request: &ScanRequest, mut on_batch: F) -> Result<ScanOutcome, RepositoryError>
    where
        F: FnMut(&ScanBatch),
    {
        let stream = self.scan(request);
        pin_mut!(stream);

        let mut progress = ScanProgress::new();
        let mut matches = Vec::new();

        while let Some(batch) = stream.try_next().await? {
            on_batch(&batch);
            progress = batch.progress;
            matches.extend(batch.matches);
        }

        progress.done = true;
        Ok(ScanOutcome { progress, matches })
    }

    /// Looks up the display data of a matching item.
    async fn build_record(&self, item: &ContentItem) -> Result<MatchRecord, RepositoryError> {
        let author_name = match item.author_id {
            Some(author_id) => self.repository.resolve_author_display_name(author_id).await?,
            None => String::new(),
        };
        let url = self.repository.resolve_permalink(item.id).await?;

        Ok(MatchRecord {
            id: item.id,
            title: strip_tags(&item.title),
            date: self.date_format.format(&item.published_at),
            author_name,
            url,
        })
    }
}
