use axum::Router;
use axum::routing::{get, post, put};

use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transcribe", post(handler::create_job))
        .route("/jobs/pending", get(handler::list_pending_jobs))
        .route("/jobs/{id}", get(handler::get_job))
        .route("/jobs/{id}/processing", put(handler::mark_processing))
        .route("/jobs/{id}/complete", put(handler::complete_job))
        .route("/jobs/{id}/fail", put(handler::fail_job))
}
