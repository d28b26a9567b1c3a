use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::routing::post;
use axum::{Json, Router};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::gemini::{GeminiClient, GenerationParams, PromptGenerator};
use crate::style::PromptStyle;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    /// `None` exactly when no API credential is configured; the endpoint then
    /// reports a configuration error without contacting the remote service.
    pub generator: Option<Arc<dyn PromptGenerator>>,
    pub params: GenerationParams,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let generator = config.api_key.as_ref().map(|key| {
            Arc::new(GeminiClient::new(key.clone(), config.model.clone()))
                as Arc<dyn PromptGenerator>
        });
        AppState {
            generator,
            params: config.params,
        }
    }

    pub fn with_generator(generator: Arc<dyn PromptGenerator>) -> Self {
        AppState {
            generator: Some(generator),
            params: GenerationParams::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub image: Option<String>,
    pub mime_type: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
}

/// Relay endpoint: validate, resolve the style, forward to the model, return
/// its text. Stateless; nothing is retried.
pub async fn generate_prompt(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let image = request
        .image
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingImageData)?;
    let mime_type = request
        .mime_type
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingImageData)?;

    let generator = state.generator.as_ref().ok_or(ApiError::MissingApiKey)?;

    let style_raw = request.style.unwrap_or_default();
    let style = style_raw
        .parse::<PromptStyle>()
        .map_err(|_| ApiError::UnknownStyle(style_raw.clone()))?;

    let image_bytes = general_purpose::STANDARD
        .decode(&image)
        .map_err(|_| ApiError::InvalidImageData)?;

    tracing::info!(%style, %mime_type, image_bytes = image_bytes.len(), "generating prompt");

    let prompt = generator
        .generate(style.instruction(), &image_bytes, &mime_type, &state.params)
        .await?;

    Ok(Json(GenerateResponse { prompt }))
}

/// The full application: the relay route plus the static client page.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-prompt", post(generate_prompt))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .fallback_service(ServeDir::new("public"))
        .with_state(state)
}
