use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use super::dto::{
    CompleteJobRequest, FailJobRequest, JobResponse, PendingJobResponse, TranscribeRequest,
};
use super::service::JobService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;

/// Submit a YouTube URL for transcription
#[utoipa::path(
    post,
    path = "/api/transcribe",
    request_body = TranscribeRequest,
    responses(
        (status = 201, description = "Job created", body = ApiResponse<JobResponse>),
        (status = 400, description = "Invalid URL")
    ),
    tag = "Jobs"
)]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<TranscribeRequest>,
) -> impl IntoResponse {
    match JobService::create(state, payload).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(job, "Job created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// List pending jobs for worker consumption, oldest first
#[utoipa::path(
    get,
    path = "/api/jobs/pending",
    responses(
        (status = 200, description = "Pending jobs", body = ApiResponse<Vec<PendingJobResponse>>)
    ),
    tag = "Jobs"
)]
pub async fn list_pending_jobs(State(state): State<AppState>) -> impl IntoResponse {
    match JobService::list_pending(state).await {
        Ok(jobs) => ApiSuccess(
            ApiResponse::success(jobs, "Pending jobs retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get job status
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job details", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found")
    ),
    tag = "Jobs"
)]
pub async fn get_job(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match JobService::find_by_id(state, id).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(job, "Job retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Claim a pending job
#[utoipa::path(
    put,
    path = "/api/jobs/{id}/processing",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job claimed", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Job is not pending")
    ),
    tag = "Jobs"
)]
pub async fn mark_processing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match JobService::mark_processing(state, id).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(job, "Job marked as processing"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Finish a job with its transcription result
#[utoipa::path(
    put,
    path = "/api/jobs/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = CompleteJobRequest,
    responses(
        (status = 200, description = "Job completed", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Job is not processing")
    ),
    tag = "Jobs"
)]
pub async fn complete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompleteJobRequest>,
) -> impl IntoResponse {
    match JobService::complete(state, id, payload).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(job, "Job completed successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Record a worker-side failure
#[utoipa::path(
    put,
    path = "/api/jobs/{id}/fail",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = FailJobRequest,
    responses(
        (status = 200, description = "Failure recorded", body = ApiResponse<JobResponse>),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Job is not processing")
    ),
    tag = "Jobs"
)]
pub async fn fail_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FailJobRequest>,
) -> impl IntoResponse {
    match JobService::fail(state, id, payload).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(job, "Job marked as failed"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
