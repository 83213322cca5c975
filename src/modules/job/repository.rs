use sqlx::PgPool;
use uuid::Uuid;

use super::model::{Job, JobStatus};
use crate::modules::transcript::model::{NewTranscript, Transcript};
use crate::modules::transcript::repository::TranscriptRepository;

pub struct JobRepository;

impl JobRepository {
    pub async fn create(pool: &PgPool, url: &str) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (url)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(url)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE status = $1 ORDER BY created_at ASC",
        )
        .bind(JobStatus::Pending)
        .fetch_all(pool)
        .await
    }

    /// Compare-and-set transition: flips `status` only if the job is still in
    /// `from`, so two racing workers cannot both claim the same job. Returns
    /// `None` when the job is missing or no longer in `from`.
    pub async fn transition(
        pool: &PgPool,
        id: Uuid,
        from: JobStatus,
        to: JobStatus,
    ) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(pool)
        .await
    }

    pub async fn mark_failed(
        pool: &PgPool,
        id: Uuid,
        error_message: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET status = $3, error_message = $4, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(JobStatus::Processing)
        .bind(JobStatus::Failed)
        .bind(error_message)
        .fetch_optional(pool)
        .await
    }

    /// Finish a `processing` job: flip it to `complete`, persist the
    /// transcript and link it back, all in one transaction. Returns `None`
    /// without side effects when the job is missing or not `processing`.
    pub async fn complete(
        pool: &PgPool,
        id: Uuid,
        new_transcript: &NewTranscript,
    ) -> Result<Option<(Job, Transcript)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let claimed = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(JobStatus::Processing)
        .bind(JobStatus::Complete)
        .fetch_optional(&mut *tx)
        .await?;

        if claimed.is_none() {
            return Ok(None);
        }

        let transcript = TranscriptRepository::create(&mut tx, new_transcript).await?;

        let job = sqlx::query_as::<_, Job>(
            "UPDATE jobs SET transcript_id = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(transcript.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((job, transcript)))
    }
}
