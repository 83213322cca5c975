use axum::{Json, extract::State};
use time::OffsetDateTime;

use super::dto::HealthResponse;
use crate::state::AppState;

/// Liveness probe. Reports database reachability but stays 200 either way so
/// the probe itself never flaps the service.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(HealthResponse {
        status: "healthy",
        database,
        timestamp: OffsetDateTime::now_utc(),
    })
}
