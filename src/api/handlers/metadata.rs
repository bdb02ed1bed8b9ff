//! Handler for link metadata endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkMetadataResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata for a short link.
///
/// # Endpoint
///
/// `GET /api/{code}`
///
/// Expired links are reported with `"expired": true` instead of an error.
///
/// # Errors
///
/// - 400 if the code is malformed
/// - 404 if the code doesn't exist
pub async fn metadata_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkMetadataResponse>, AppError> {
    let metadata = state.link_service.metadata(&code).await?;
    let short_url = state.short_url(&metadata.link.code);

    Ok(Json(LinkMetadataResponse::from_metadata(metadata, short_url)))
}
