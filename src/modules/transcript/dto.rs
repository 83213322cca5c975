use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use super::model::{Transcript, TranscriptSegment};

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscriptResponse {
    pub transcript_id: Uuid,
    pub job_id: Uuid,
    pub title: String,
    pub duration: f64,
    pub content: String,
    pub timestamps: Vec<TranscriptSegment>,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

impl From<Transcript> for TranscriptResponse {
    fn from(t: Transcript) -> Self {
        Self {
            transcript_id: t.id,
            job_id: t.job_id,
            title: t.title,
            duration: t.duration,
            content: t.content,
            timestamps: t.timestamps.0,
            created_at: t.created_at,
        }
    }
}
