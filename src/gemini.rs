//! Client for the Google Gemini `generateContent` API.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sampling parameters forwarded with every generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        GenerationParams {
            temperature: 0.8,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected Gemini response: {0}")]
    Parse(String),
}

/// The remote multimodal capability: an instruction plus inline image bytes in,
/// generated text out. Handlers depend on this trait so tests can stub it.
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    async fn generate(
        &self,
        instruction: &str,
        image: &[u8],
        mime_type: &str,
        params: &GenerationParams,
    ) -> Result<String, RemoteError>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_payload(
        instruction: &str,
        image: &[u8],
        mime_type: &str,
        params: &GenerationParams,
    ) -> Value {
        serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": instruction },
                    {
                        "inline_data": {
                            "mime_type": mime_type,
                            "data": general_purpose::STANDARD.encode(image),
                        }
                    }
                ]
            }],
            "generationConfig": {
                "temperature": params.temperature,
                "maxOutputTokens": params.max_output_tokens,
            }
        })
    }

    fn extract_text(body: &Value) -> Result<String, RemoteError> {
        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| RemoteError::Parse("no generated text in response".to_string()))
    }
}

#[async_trait]
impl PromptGenerator for GeminiClient {
    async fn generate(
        &self,
        instruction: &str,
        image: &[u8],
        mime_type: &str,
        params: &GenerationParams,
    ) -> Result<String, RemoteError> {
        let payload = Self::build_payload(instruction, image, mime_type, params);

        tracing::debug!(model = %self.model, mime_type, "sending generateContent request");

        let response = self
            .http
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RemoteError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = serde_json::from_str(&body)
            .map_err(|e| RemoteError::Parse(format!("invalid JSON: {e}")))?;
        Self::extract_text(&body)
    }
}
