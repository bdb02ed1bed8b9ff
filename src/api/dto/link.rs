//! DTOs for the link metadata endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::LinkMetadata;

/// Link metadata, returned for expired links too.
#[derive(Debug, Serialize)]
pub struct LinkMetadataResponse {
    pub code: String,
    pub url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub hits: i64,
    pub expired: bool,
}

impl LinkMetadataResponse {
    pub fn from_metadata(metadata: LinkMetadata, short_url: String) -> Self {
        let LinkMetadata { link, expired } = metadata;

        Self {
            code: link.code,
            url: link.long_url,
            short_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            hits: link.hits,
            expired,
        }
    }
}
