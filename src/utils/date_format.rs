//! Display format for report dates.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

/// Default display layout, e.g. `March 5, 2024`.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Errors that can occur when parsing a display format.
#[derive(Debug, thiserror::Error)]
pub enum DisplayFormatError {
    #[error("Invalid date display format: '{0}'")]
    Invalid(String),
}

/// A strftime pattern checked once up front, so formatting cannot fail later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat(String);

impl DisplayFormat {
    /// Parses a chrono strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayFormatError::Invalid`] if the pattern contains an
    /// unknown specifier or is empty.
    pub fn parse(pattern: &str) -> Result<Self, DisplayFormatError> {
        if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DisplayFormatError::Invalid(pattern.to_string()));
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders `value` with this pattern.
    pub fn format(&self, value: &DateTime<Utc>) -> String {
        value.format(&self.0).to_string()
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self(DEFAULT_DISPLAY_FORMAT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_format() {
        let value = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(DisplayFormat::default().format(&value), "March 5, 2024");
    }

    #[test]
    fn test_custom_format() {
        let value = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let format = DisplayFormat::parse("%d/%m/%Y %H:%M").unwrap();
        assert_eq!(format.format(&value), "05/03/2024 14:30");
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(DisplayFormat::parse("%Q").is_err());
        assert!(DisplayFormat::parse("").is_err());
    }
}
