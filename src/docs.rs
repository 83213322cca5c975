use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::job::handler::create_job,
        crate::modules::job::handler::list_pending_jobs,
        crate::modules::job::handler::get_job,
        crate::modules::job::handler::mark_processing,
        crate::modules::job::handler::complete_job,
        crate::modules::job::handler::fail_job,
        crate::modules::transcript::handler::get_transcript,
        crate::modules::health::handler::health_check,
    ),
    components(
        schemas(
            crate::modules::job::dto::TranscribeRequest,
            crate::modules::job::dto::CompleteJobRequest,
            crate::modules::job::dto::FailJobRequest,
            crate::modules::job::dto::JobResponse,
            crate::modules::job::dto::PendingJobResponse,
            crate::modules::job::model::JobStatus,
            crate::modules::transcript::dto::TranscriptResponse,
            crate::modules::transcript::model::TranscriptSegment,
            crate::modules::health::dto::HealthResponse,
        )
    ),
    tags(
        (name = "Jobs", description = "Transcription job lifecycle"),
        (name = "Transcripts", description = "Completed transcription results"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
