use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// One timed segment of a transcript. Insertion order is chronological
/// order; segments are stored exactly as the worker reported them.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Transcript {
    pub id: Uuid,
    pub job_id: Uuid,
    pub title: String,
    pub duration: f64,
    pub content: String,
    pub timestamps: Json<Vec<TranscriptSegment>>,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

/// Insert payload for the completion transaction.
#[derive(Debug)]
pub struct NewTranscript {
    pub job_id: Uuid,
    pub title: String,
    pub duration: f64,
    pub content: String,
    pub timestamps: Json<Vec<TranscriptSegment>>,
}
