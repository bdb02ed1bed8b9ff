//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL with its accounting metadata.
///
/// Expiry is never stored as a status; it is recomputed on every read from
/// `expires_at` and the caller's notion of "now" (see [`Link::is_expired_at`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub hits: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        hits: i64,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
            expires_at,
            hits,
        }
    }

    /// Returns true if the link is expired at `now`.
    ///
    /// The boundary is inclusive: a link whose expiry equals `now` is expired.
    /// Purging uses the same `<=` comparison.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// A request to shorten a URL, as accepted by
/// [`crate::application::services::LinkService::shorten`].
#[derive(Debug, Clone, Default)]
pub struct ShortenInput {
    pub url: String,
    /// Caller-chosen alias. Blank values are treated as absent.
    pub custom_code: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// A link together with its expiry state, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMetadata {
    pub link: Link,
    pub expired: bool,
}
