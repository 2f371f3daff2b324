//! Retry decorator for content repositories.
//!
//! The scanner never retries on its own. Callers that want retries wrap their
//! repository in [`RetryingContentRepository`] and pick a [`RetryPolicy`].

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::entities::ContentItem;
use crate::domain::repositories::{ContentRepository, PageQuery};
use crate::error::RepositoryError;

/// Upper bound for a single back-off delay.
const MAX_DELAY: Duration = Duration::from_secs(10);

/// How often and how patiently transient failures are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure.
    pub max_retries: usize,
    /// Delays grow as `base * 2`, `base * 4`, ... with jitter, capped at 10s.
    pub base_delay: Duration,
}

impl RetryPolicy {
    fn strategy(&self) -> impl Iterator<Item = Duration> {
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX).max(1);
        ExponentialBackoff::from_millis(2)
            .factor(base_ms)
            .max_delay(MAX_DELAY)
            .map(jitter)
            .take(self.max_retries)
    }
}

/// Wraps a repository and retries transient failures.
///
/// Only errors for which [`RepositoryError::is_transient`] holds are retried;
/// anything else is returned on the first attempt.
pub struct RetryingContentRepository<R: ContentRepository> {
    inner: R,
    policy: RetryPolicy,
}

impl<R: ContentRepository> RetryingContentRepository<R> {
    pub fn new(inner: R, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    async fn retry<T, A, Fut>(&self, operation: &'static str, mut action: A) -> Result<T, RepositoryError>
    where
        A: FnMut() -> Fut,
        Fut: Future<Output = Result<T, RepositoryError>>,
    {
        let mut attempt = 0u32;
        RetryIf::spawn(
            self.policy.strategy(),
            || {
                attempt += 1;
                if attempt > 1 {
                    tracing::warn!(operation, attempt, "Retrying repository call");
                }
                action()
            },
            RepositoryError::is_transient,
        )
        .await
    }
}

#[async_trait]
impl<R: ContentRepository> ContentRepository for RetryingContentRepository<R> {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<ContentItem>, RepositoryError> {
        self.retry("fetch_page", || self.inner.fetch_page(query)).await
    }

    async fn resolve_author_display_name(&self, author_id: i64) -> Result<String, RepositoryError> {
        self.retry("resolve_author_display_name", || {
            self.inner.resolve_author_display_name(author_id)
        })
        .await
    }

    async fn resolve_permalink(&self, item_id: i64) -> Result<String, RepositoryError> {
        self.retry("resolve_permalink", || self.inner.resolve_permalink(item_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockContentRepository;
    use mockall::Sequence;

    fn policy(max_retries: usize) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            base_delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_transient_failure_is_retried() {
        let mut mock = MockContentRepository::new();
        let mut seq = Sequence::new();
        mock.expect_resolve_permalink()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));
        mock.expect_resolve_permalink()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("https://example.com/x/".to_string()));

        let repo = RetryingContentRepository::new(mock, policy(3));
        let url = repo.resolve_permalink(1).await.unwrap();

        assert_eq!(url, "https://example.com/x/");
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let mut mock = MockContentRepository::new();
        mock.expect_resolve_author_display_name()
            .times(3)
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let repo = RetryingContentRepository::new(mock, policy(2));
        let result = repo.resolve_author_display_name(1).await;

        assert!(matches!(result, Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))));
    }

    #[tokio::test]
    async fn test_permanent_failure_is_not_retried() {
        let mut mock = MockContentRepository::new();
        mock.expect_resolve_permalink().times(1).returning(|id| {
            Err(RepositoryError::InvalidPermalink {
                id,
                reason: "bad slug".to_string(),
            })
        });

        let repo = RetryingContentRepository::new(mock, policy(5));
        assert!(repo.resolve_permalink(3).await.is_err());
    }

    #[test]
    fn test_strategy_length_and_cap() {
        let delays: Vec<Duration> = RetryPolicy {
            max_retries: 4,
            base_delay: Duration::from_secs(60),
        }
        .strategy()
        .collect();

        assert_eq!(delays.len(), 4);
        assert!(delays.iter().all(|d| *d <= MAX_DELAY));
    }
}
