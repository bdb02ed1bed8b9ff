//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, ShortenInput};

/// Request to shorten a single URL.
///
/// ```json
/// { "url": "https://example.com/a", "custom_code": "promo", "expires_at": "2030-01-01T00:00:00Z" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Destination URL. Normalized and checked by the service.
    #[validate(length(max = 16384, message = "url payload is too large"))]
    pub url: String,

    /// Optional alias. Also accepted as `custom`.
    #[serde(default, alias = "custom")]
    #[validate(length(max = 1024, message = "custom_code payload is too large"))]
    pub custom_code: Option<String>,

    /// Optional expiry timestamp (RFC 3339). Must lie in the future.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<ShortenRequest> for ShortenInput {
    fn from(request: ShortenRequest) -> Self {
        Self {
            url: request.url,
            custom_code: request.custom_code,
            expires_at: request.expires_at,
        }
    }
}

/// Newly created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    /// Normalized destination.
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortenResponse {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            code: link.code,
            short_url,
            url: link.long_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}
