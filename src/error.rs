use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::gemini::RemoteError;

/// Everything the relay endpoint can report back as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing image data or MIME type.")]
    MissingImageData,
    #[error("Image data is not valid base64.")]
    InvalidImageData,
    #[error("Missing or unknown prompt style {0:?}; expected one of: stylized, simple, detailed.")]
    UnknownStyle(String),
    #[error("Server configuration error: GEMINI_API_KEY not set.")]
    MissingApiKey,
    #[error("Internal Server Error: {0}")]
    Remote(#[from] RemoteError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingImageData
            | ApiError::InvalidImageData
            | ApiError::UnknownStyle(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey | ApiError::Remote(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::warn!(%status, "{message}");
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_are_client_errors() {
        assert_eq!(ApiError::MissingImageData.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidImageData.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UnknownStyle("artsy".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn configuration_and_remote_failures_are_server_errors() {
        assert_eq!(
            ApiError::MissingApiKey.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let remote = ApiError::Remote(RemoteError::Parse("no text".to_string()));
        assert_eq!(remote.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(remote.to_string().contains("no text"));
    }
}
