//! Error types shared across the scanner.
//!
//! - [`ValidationError`] - rejected `--date-before` / `--date-after` input
//! - [`RepositoryError`] - failures raised by a [`ContentRepository`](crate::domain::repositories::ContentRepository)

use chrono::NaiveDate;
use std::fmt;

/// Which end of the date window a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Before,
    After,
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::Before => f.write_str("date-before"),
            DateBound::After => f.write_str("date-after"),
        }
    }
}

/// Date range input rejected before any repository call is issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid date format for '{bound}': '{value}'. Use YYYY-MM-DD.")]
    InvalidFormat { bound: DateBound, value: String },

    #[error("The '{bound}' parameter cannot be in the future ({value}). Current date is {today}.")]
    FutureDate {
        bound: DateBound,
        value: NaiveDate,
        today: NaiveDate,
    },

    #[error(
        "The 'date-after' parameter ({after}) must not be later than the 'date-before' parameter ({before})."
    )]
    InvertedRange { after: NaiveDate, before: NaiveDate },
}

/// Failure reported by the content repository collaborator.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cannot build permalink for item {id}: {reason}")]
    InvalidPermalink { id: i64, reason: String },
}

impl RepositoryError {
    /// Returns true for failures worth retrying (connection drops, pool exhaustion).
    pub fn is_transient(&self) -> bool {
        match self {
            RepositoryError::Database(e) => matches!(
                e,
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
            ),
            RepositoryError::InvalidPermalink { .. } => false,
        }
    }
}
