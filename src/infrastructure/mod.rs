//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`retry`] - opt-in retry decorator for any repository

pub mod persistence;
pub mod retry;
