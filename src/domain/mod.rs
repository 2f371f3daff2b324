//! Domain layer: entities, the repository contract and the pure scanning rules.
//!
//! # Architecture
//!
//! - [`entities`] - data model of a scan run
//! - [`repositories`] - content store contract implemented by infrastructure
//! - [`validation`] - date range validation (pure, `today` is a parameter)
//! - [`matcher`] - exact marker test
//!
//! The domain layer has no dependency on infrastructure or presentation code.

pub mod entities;
pub mod matcher;
pub mod repositories;
pub mod validation;
