//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "custom_code": "promo",                // optional, alias: "custom"
///   "expires_at": "2030-01-01T00:00:00Z"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "promo",
///   "short_url": "http://localhost:8080/promo",
///   "url": "https://example.com/a",
///   "created_at": "2024-06-01T12:00:00Z",
///   "expires_at": "2030-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 for a malformed body, URL, alias or past expiry
/// - 409 if the alias is taken
/// - 429 when the per-IP rate limit is exceeded
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    request.validate()?;

    let link = state.link_service.shorten(request.into()).await?;
    let short_url = state.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::from_link(link, short_url)),
    ))
}
