//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for persisting short links.
///
/// Every method is a single atomic store operation. The service never composes
/// two calls into a check-then-act sequence, so uniqueness must be enforced by
/// [`LinkRepository::create`] itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link, atomically with the uniqueness check on its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Storage`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, expired links included.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Increments the hit counter of a link by exactly one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code (e.g. it was
    /// purged concurrently).
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_hits(&self, code: &str) -> Result<(), AppError>;

    /// Deletes every link whose expiry is set and at or before `cutoff`.
    ///
    /// Returns the number of deleted links.
    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;

    /// Checks that the underlying store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
