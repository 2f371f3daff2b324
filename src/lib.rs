//! # marker-scan
//!
//! Finds published content whose body carries one of a fixed set of markers,
//! scanning a paginated PostgreSQL content store within a date window.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - entities, the repository contract, date validation and the marker test
//! - **Application Layer** ([`application`]) - the batch scanner and the report builder
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL repository and retry decorator
//!
//! ## Flow
//!
//! 1. [`domain::validation::validate_date_range`] turns CLI input into a [`domain::entities::ScanRequest`]
//! 2. [`application::services::BatchScanner`] pages through the repository, applying
//!    the server-side pre-filter and then [`domain::matcher::MarkerMatcher`]
//! 3. [`application::services::ReportBuilder`] renders the matches and summary
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use error::{RepositoryError, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BatchScanner, Report, ReportBuilder, ScanBatch, ScanOutcome};
    pub use crate::domain::entities::{ContentItem, MatchRecord, ScanProgress, ScanRequest};
    pub use crate::domain::matcher::MarkerMatcher;
    pub use crate::domain::repositories::{ContentRepository, PageQuery};
    pub use crate::domain::validation::validate_date_range;
    pub use crate::error::{RepositoryError, ValidationError};
}
