//! Application layer services.
//!
//! Services consume the domain's repository trait and pure rules, and give the
//! binary a small API to call.
//!
//! # Available Services
//!
//! - [`services::scan_service::BatchScanner`] - paginated scan with the two-stage filter
//! - [`services::report_service::ReportBuilder`] - match table and summary

pub mod services;
