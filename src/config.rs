use std::env;

use crate::gemini::GenerationParams;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Absence is reported per-request by the endpoint, not at startup.
    pub api_key: Option<String>,
    pub model: String,
    pub params: GenerationParams,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: 3000,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            params: GenerationParams::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = GenerationParams::default();

        AppConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            params: GenerationParams {
                temperature: env::var("GEMINI_TEMPERATURE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.temperature),
                max_output_tokens: env::var("GEMINI_MAX_OUTPUT_TOKENS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.max_output_tokens),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_generation_params() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.params.temperature, 0.8);
        assert_eq!(config.params.max_output_tokens, 2048);
    }
}
