//! Validated input of a scan run.

use chrono::NaiveDate;
use std::num::NonZeroU32;

/// Number of items requested per repository page.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::new(1000).unwrap();

/// Immutable, validated parameters of one scan run.
///
/// Produced by [`validate_date_range`](crate::domain::validation::validate_date_range),
/// which guarantees `date_after <= date_before <= today`. Both bounds are
/// inclusive calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    date_after: NaiveDate,
    date_before: NaiveDate,
    page_size: NonZeroU32,
}

impl ScanRequest {
    pub(crate) fn new(date_after: NaiveDate, date_before: NaiveDate) -> Self {
        Self {
            date_after,
            date_before,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Returns a copy of the request using a different page size.
    pub fn with_page_size(self, page_size: NonZeroU32) -> Self {
        Self { page_size, ..self }
    }

    pub fn date_after(&self) -> NaiveDate {
        self.date_after
    }

    pub fn date_before(&self) -> NaiveDate {
        self.date_before
    }

    pub fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }
}
