//! Date range validation for the `search` command.
//!
//! Turns the raw `--date-before` / `--date-after` strings into a
//! [`ScanRequest`]. The function is pure: "today" is an explicit argument so
//! callers (and tests) decide what the current date is.

use chrono::{Days, NaiveDate};

use crate::domain::entities::ScanRequest;
use crate::error::{DateBound, ValidationError};

/// Accepted input layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the default window, today included.
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Validates the requested date window.
///
/// # Defaults
///
/// - `date_before`: `today`
/// - `date_after`: `today - 29 days`, a trailing 30-day window including today
///
/// # Errors
///
/// Checks run in this order and the first failure is returned:
///
/// 1. [`ValidationError::InvalidFormat`] if a supplied string is not a strict
///    `YYYY-MM-DD` date (`date-before` is checked first)
/// 2. [`ValidationError::FutureDate`] if either bound lies after `today`
/// 3. [`ValidationError::InvertedRange`] if `date_after > date_before`
pub fn validate_date_range(
    date_before: Option<&str>,
    date_after: Option<&str>,
    today: NaiveDate,
) -> Result<ScanRequest, ValidationError> {
    let before = match date_before {
        Some(raw) => parse_strict(raw, DateBound::Before)?,
        None => today,
    };
    let after = match date_after {
        Some(raw) => parse_strict(raw, DateBound::After)?,
        None => default_window_start(today),
    };

    for (bound, value) in [(DateBound::Before, before), (DateBound::After, after)] {
        if value > today {
            return Err(ValidationError::FutureDate {
                bound,
                value,
                today,
            });
        }
    }

    if after > before {
        return Err(ValidationError::InvertedRange { after, before });
    }

    Ok(ScanRequest::new(after, before))
}

/// First day of the default window ending on `today`.
pub fn default_window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN)
}

/// Parses `raw` and insists that formatting the result reproduces it exactly.
///
/// This rejects input a lenient parser would accept, such as unpadded
/// fields (`2024-1-5`) or surrounding whitespace.
fn parse_strict(raw: &str, bound: DateBound) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
        .ok_or_else(|| ValidationError::InvalidFormat {
            bound,
            value: raw.to_string(),
        })
}
