//! Hit event model for asynchronous hit accounting.

use chrono::{DateTime, Utc};

/// A single successful resolution of a short code, queued for accounting.
///
/// Redirect handlers push these onto a bounded channel and return right away.
/// [`crate::application::workers::run_hit_worker`] drains the channel and
/// increments the stored counters, so a slow or failing store never delays a
/// redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitEvent {
    pub code: String,
    pub occurred_at: DateTime<Utc>,
}

impl HitEvent {
    /// Creates a hit event stamped with the current time.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            occurred_at: Utc::now(),
        }
    }
}
