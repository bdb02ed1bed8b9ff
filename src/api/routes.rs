//! API route configuration.

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{metadata_handler, shorten_handler};
use crate::api::middleware::rate_limit::{self, RateLimitSettings};
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link (rate limited per client IP)
/// - `GET  /{code}`  - Link metadata, including expired links
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn api_routes(rate_limit: RateLimitSettings) -> Result<Router<AppState>> {
    let shorten = rate_limit::limit(post(shorten_handler), rate_limit)?;

    Ok(Router::new()
        .route("/shorten", shorten)
        .route("/{code}", get(metadata_handler)))
}
