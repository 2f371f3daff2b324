//! Core domain entities of a scan run.
//!
//! # Entity Types
//!
//! - [`ContentItem`] - one item as returned by the content repository (read-only)
//! - [`ScanRequest`] - validated, immutable input of a run
//! - [`ScanProgress`] - running counters owned by the scanner for one run
//! - [`MatchRecord`] - report row created for every matching item
//!
//! No entity outlives the run that created it.

pub mod content_item;
pub mod match_record;
pub mod scan_progress;
pub mod scan_request;

pub use content_item::ContentItem;
pub use match_record::MatchRecord;
pub use scan_progress::ScanProgress;
pub use scan_request::{DEFAULT_PAGE_SIZE, ScanRequest};
