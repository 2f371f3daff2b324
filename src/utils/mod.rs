//! Helper functions shared by the scanner and the report.
//!
//! - [`markup`] - markup stripping for titles
//! - [`date_format`] - validated strftime display format

pub mod date_format;
pub mod markup;
