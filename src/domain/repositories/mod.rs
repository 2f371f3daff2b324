//! Repository trait definitions for the domain layer.
//!
//! The content store is an external collaborator: the scanner only consumes
//! the contract defined here. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ContentRepository`] - paginated, pre-filtered retrieval of content items

pub mod content_repository;

pub use content_repository::{ContentRepository, ContentStatus, PageOrder, PageQuery};

#[cfg(test)]
pub use content_repository::MockContentRepository;
