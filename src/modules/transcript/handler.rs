use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use super::dto::TranscriptResponse;
use super::service::TranscriptService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;

/// Fetch a completed transcript
#[utoipa::path(
    get,
    path = "/api/transcripts/{id}",
    params(
        ("id" = Uuid, Path, description = "Transcript ID")
    ),
    responses(
        (status = 200, description = "Transcript details", body = ApiResponse<TranscriptResponse>),
        (status = 404, description = "Transcript not found")
    ),
    tag = "Transcripts"
)]
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match TranscriptService::find_by_id(state, id).await {
        Ok(transcript) => ApiSuccess(
            ApiResponse::success(transcript, "Transcript retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
