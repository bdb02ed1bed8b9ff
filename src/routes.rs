//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Landing page with a shorten form
//! - `GET  /health`        - Health check: database, hit queue
//! - `POST /api/shorten`   - Create a short link (per-IP rate limited)
//! - `GET  /api/{code}`    - Link metadata
//! - `GET  /{code}`        - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on link creation
//! - **Path normalization** - Trailing slash handling

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, index_handler, redirect_handler};
use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Serve it with `into_make_service_with_connect_info::<SocketAddr>()`; the
/// rate limiter keys clients by peer address unless `behind_proxy` is set.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, rate_limit: RateLimitSettings) -> Result<NormalizePath<Router>> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes(rate_limit)?)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
