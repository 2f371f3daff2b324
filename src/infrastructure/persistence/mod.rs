//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgContentRepository`] - paginated content retrieval, author and permalink lookups

pub mod pg_content_repository;

pub use pg_content_repository::PgContentRepository;
