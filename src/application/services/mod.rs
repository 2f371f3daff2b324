//! Services for the application layer.

pub mod report_service;
pub mod scan_service;

pub use report_service::{Report, ReportBuilder};
pub use scan_service::{BatchScanner, ScanBatch, ScanOutcome};
