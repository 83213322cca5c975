use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::dto::{
    CompleteJobRequest, FailJobRequest, JobResponse, PendingJobResponse, TranscribeRequest,
};
use super::model::JobStatus;
use super::repository::JobRepository;
use crate::common::error::ServiceError;
use crate::common::youtube::extract_video_id;
use crate::modules::transcript::model::NewTranscript;
use crate::state::AppState;

pub struct JobService;

impl JobService {
    pub async fn create(
        state: AppState,
        req: TranscribeRequest,
    ) -> Result<JobResponse, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let job = JobRepository::create(&state.db, &req.url).await?;

        info!(
            video_id = extract_video_id(&job.url).as_deref(),
            "Created job {}", job.id
        );
        Ok(job.into())
    }

    pub async fn list_pending(state: AppState) -> Result<Vec<PendingJobResponse>, ServiceError> {
        let jobs = JobRepository::list_pending(&state.db).await?;
        Ok(jobs.into_iter().map(PendingJobResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: Uuid) -> Result<JobResponse, ServiceError> {
        let job = JobRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job", id))?;
        Ok(job.into())
    }

    pub async fn mark_processing(state: AppState, id: Uuid) -> Result<JobResponse, ServiceError> {
        match JobRepository::transition(&state.db, id, JobStatus::Pending, JobStatus::Processing)
            .await?
        {
            Some(job) => {
                info!("Job {} marked as processing", job.id);
                Ok(job.into())
            }
            None => Err(Self::transition_error(&state, id, "mark job as processing").await?),
        }
    }

    pub async fn complete(
        state: AppState,
        id: Uuid,
        req: CompleteJobRequest,
    ) -> Result<JobResponse, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let new_transcript = NewTranscript {
            job_id: id,
            title: req.title,
            duration: req.duration,
            content: req.content,
            timestamps: sqlx::types::Json(req.timestamps),
        };

        match JobRepository::complete(&state.db, id, &new_transcript).await? {
            Some((job, transcript)) => {
                info!("Job {} completed with transcript {}", job.id, transcript.id);
                Ok(job.into())
            }
            None => Err(Self::transition_error(&state, id, "complete job").await?),
        }
    }

    pub async fn fail(
        state: AppState,
        id: Uuid,
        req: FailJobRequest,
    ) -> Result<JobResponse, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        match JobRepository::mark_failed(&state.db, id, &req.error).await? {
            Some(job) => {
                info!("Job {} marked as failed: {}", job.id, req.error);
                Ok(job.into())
            }
            None => Err(Self::transition_error(&state, id, "fail job").await?),
        }
    }

    /// A conditional transition matched no row. Decide between 404 and 409 by
    /// re-reading the job.
    async fn transition_error(
        state: &AppState,
        id: Uuid,
        action: &str,
    ) -> Result<ServiceError, ServiceError> {
        match JobRepository::find_by_id(&state.db, id).await? {
            None => Ok(ServiceError::not_found("Job", id)),
            Some(job) => Ok(ServiceError::InvalidState(format!(
                "Cannot {}. Current status: {}",
                action, job.status
            ))),
        }
    }
}
