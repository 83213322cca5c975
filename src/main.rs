use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transcription_backend::app;
use transcription_backend::config::settings::AppConfig;
use transcription_backend::infrastructure::db::pool;
use transcription_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::new().context("failed to load configuration")?;

    let default_level = if config.debug { "debug" } else { &config.log_level };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Starting transcription backend...");

    let db = pool::connect_to_db(&config.database_url)
        .await
        .context("failed to connect to database")?;

    pool::run_migrations(&db)
        .await
        .context("failed to run database migrations")?;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = AppState::new(config, db);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
