use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ai_prompt_generator::config::AppConfig;
use ai_prompt_generator::routes::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; /generate-prompt will return a configuration error"
        );
    }

    let state = AppState::from_config(&config);
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(model = %config.model, "listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
