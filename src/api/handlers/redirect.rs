//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::application::workers::enqueue_hit;
use crate::domain::hit_event::HitEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (expired links are refused)
/// 2. Offer a [`HitEvent`] to the hit queue without waiting
/// 3. Return `301 Moved Permanently`
///
/// If the queue is full the hit is dropped; the redirect is still served.
///
/// # Errors
///
/// - 400 if the code is malformed
/// - 404 if the code doesn't exist
/// - 410 if the link has expired
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    enqueue_hit(&state.hit_sender, HitEvent::new(link.code));
    metrics::counter!("redirects_total").increment(1);

    debug!(code = %code, target = %link.long_url, "Redirecting");

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, link.long_url)],
    ))
}
