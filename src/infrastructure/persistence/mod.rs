//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx, plus pool
//! setup and embedded migrations.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage, hit counters and expiry purge

pub mod pool;
pub mod sqlite_link_repository;

pub use pool::{MIGRATOR, connect, connect_and_migrate};
pub use sqlite_link_repository::SqliteLinkRepository;
