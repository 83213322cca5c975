//! HTTP round-trip tests through the full router: the endpoint matrix a
//! worker and a client actually hit, including the 404/409 failure paths.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use transcription_backend::app::create_app;
use transcription_backend::config::settings::AppConfig;
use transcription_backend::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn test_app(pool: PgPool) -> Router {
    let state = AppState::new(
        AppConfig {
            server_port: 0,
            database_url: String::new(),
            debug: false,
            log_level: "info".to_string(),
        },
        pool,
    );
    create_app(state).await
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create_job(app: &Router, url: &str) -> String {
    let (status, body) = send(app, "POST", "/api/transcribe", Some(json!({ "url": url }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["job_id"].as_str().unwrap().to_string()
}

fn transcript_payload() -> Value {
    json!({
        "title": "Test Video",
        "duration": 120.0,
        "content": "hi there",
        "timestamps": [{ "start": 0.0, "end": 5.0, "text": "hi" }]
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn health_reports_connected_database(pool: PgPool) {
    let app = test_app(pool).await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_job_returns_201_with_pending_status(pool: PgPool) {
    let app = test_app(pool).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/transcribe",
        Some(json!({ "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["status"], "pending");
    assert!(body["data"]["job_id"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn create_job_rejects_invalid_urls(pool: PgPool) {
    let app = test_app(pool).await;

    for url in ["https://invalid-url.com", ""] {
        let (status, body) =
            send(&app, "POST", "/api/transcribe", Some(json!({ "url": url }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn pending_jobs_are_listed_for_workers(pool: PgPool) {
    let app = test_app(pool).await;

    let (status, body) = send(&app, "GET", "/api/jobs/pending", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let job_id = create_job(&app, "https://youtube.com/watch?v=dQw4w9WgXcQ").await;

    let (status, body) = send(&app, "GET", "/api/jobs/pending", None).await;
    assert_eq!(status, StatusCode::OK);
    let pending = body["data"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["job_id"], job_id.as_str());
    assert_eq!(pending[0]["url"], "https://youtube.com/watch?v=dQw4w9WgXcQ");
}

#[sqlx::test(migrations = "./migrations")]
async fn claiming_a_job_twice_conflicts(pool: PgPool) {
    let app = test_app(pool).await;
    let job_id = create_job(&app, "https://youtube.com/watch?v=dQw4w9WgXcQ").await;
    let uri = format!("/api/jobs/{job_id}/processing");

    let (status, body) = send(&app, "PUT", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "processing");

    let (status, body) = send(&app, "PUT", &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");
}

#[sqlx::test(migrations = "./migrations")]
async fn complete_job_then_fetch_transcript(pool: PgPool) {
    let app = test_app(pool).await;
    let job_id = create_job(&app, "https://youtube.com/watch?v=dQw4w9WgXcQ").await;

    send(&app, "PUT", &format!("/api/jobs/{job_id}/processing"), None).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/jobs/{job_id}/complete"),
        Some(transcript_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "complete");
    let transcript_id = body["data"]["transcript_id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", &format!("/api/transcripts/{transcript_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let transcript = &body["data"];
    assert_eq!(transcript["job_id"], job_id.as_str());
    assert_eq!(transcript["title"], "Test Video");
    assert_eq!(transcript["duration"], 120.0);
    assert_eq!(transcript["content"], "hi there");
    assert_eq!(transcript["timestamps"][0]["text"], "hi");

    // A finished job cannot be completed again.
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/jobs/{job_id}/complete"),
        Some(transcript_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn completing_an_unclaimed_job_conflicts(pool: PgPool) {
    let app = test_app(pool).await;
    let job_id = create_job(&app, "https://youtube.com/watch?v=dQw4w9WgXcQ").await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/jobs/{job_id}/complete"),
        Some(transcript_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn failing_a_job_records_the_error(pool: PgPool) {
    let app = test_app(pool).await;
    let job_id = create_job(&app, "https://youtube.com/watch?v=dQw4w9WgXcQ").await;

    send(&app, "PUT", &format!("/api/jobs/{job_id}/processing"), None).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/jobs/{job_id}/fail"),
        Some(json!({ "error": "download failed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "failed");

    let (status, body) = send(&app, "GET", &format!("/api/jobs/{job_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "failed");
    assert_eq!(body["data"]["error_message"], "download failed");
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_ids_return_404(pool: PgPool) {
    let app = test_app(pool).await;
    let missing = uuid::Uuid::new_v4();

    let (status, _) = send(&app, "GET", &format!("/api/jobs/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", &format!("/api/jobs/{missing}/processing"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/api/transcripts/{missing}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
