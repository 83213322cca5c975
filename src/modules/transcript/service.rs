use uuid::Uuid;

use super::dto::TranscriptResponse;
use super::repository::TranscriptRepository;
use crate::common::error::ServiceError;
use crate::state::AppState;

pub struct TranscriptService;

impl TranscriptService {
    pub async fn find_by_id(state: AppState, id: Uuid) -> Result<TranscriptResponse, ServiceError> {
        let transcript = TranscriptRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Transcript", id))?;
        Ok(transcript.into())
    }
}
