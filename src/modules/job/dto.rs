use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::youtube::validate_youtube_url;
use crate::modules::job::model::{Job, JobStatus};
use crate::modules::transcript::model::TranscriptSegment;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TranscribeRequest {
    #[validate(
        length(min = 1, message = "URL is required"),
        custom(function = validate_youtube_url)
    )]
    pub url: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CompleteJobRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(range(min = 0.0, message = "Duration must not be negative"))]
    pub duration: f64,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub timestamps: Vec<TranscriptSegment>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FailJobRequest {
    #[validate(length(min = 1, message = "Error message is required"))]
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobResponse {
    pub job_id: Uuid,
    pub status: JobStatus,
    pub error_message: Option<String>,
    pub transcript_id: Option<Uuid>,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    pub updated_at: OffsetDateTime,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            job_id: job.id,
            status: job.status,
            error_message: job.error_message,
            transcript_id: job.transcript_id,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Trimmed view handed to polling workers.
#[derive(Debug, Serialize, ToSchema)]
pub struct PendingJobResponse {
    pub job_id: Uuid,
    pub url: String,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

impl From<Job> for PendingJobResponse {
    fn from(job: Job) -> Self {
        Self {
            job_id: job.id,
            url: job.url,
            created_at: job.created_at,
        }
    }
}
