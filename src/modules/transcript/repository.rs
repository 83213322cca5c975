use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::model::{NewTranscript, Transcript};

pub struct TranscriptRepository;

impl TranscriptRepository {
    /// Runs inside the job-completion transaction so the transcript row and
    /// the job's status flip commit or roll back together.
    pub async fn create(
        conn: &mut PgConnection,
        new: &NewTranscript,
    ) -> Result<Transcript, sqlx::Error> {
        sqlx::query_as::<_, Transcript>(
            r#"
            INSERT INTO transcripts (job_id, title, duration, content, timestamps)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.job_id)
        .bind(&new.title)
        .bind(new.duration)
        .bind(&new.content)
        .bind(&new.timestamps)
        .fetch_one(conn)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Transcript>, sqlx::Error> {
        sqlx::query_as::<_, Transcript>("SELECT * FROM transcripts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
