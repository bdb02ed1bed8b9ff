//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1` through the link repository
/// 2. **Hit Queue**: Checks the channel is open and reports free slots
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "hit_queue": { "status": "ok", "message": "Free slots: 10000" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let queue_check = check_hit_queue(&state);

    let all_healthy = db_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            hit_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.link_service.health_check().await {
        Ok(()) => CheckStatus::ok("Connected"),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            CheckStatus::error("Database unavailable")
        }
    }
}

fn check_hit_queue(state: &AppState) -> CheckStatus {
    if state.hit_sender.is_closed() {
        CheckStatus::error("Hit queue is closed")
    } else {
        CheckStatus::ok(format!("Free slots: {}", state.hit_sender.capacity()))
    }
}
