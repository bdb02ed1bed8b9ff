//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite pool, migrations and repository implementations

pub mod persistence;
