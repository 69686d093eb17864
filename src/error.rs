use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::tts::{TtsErrorKind, TtsServiceError};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Text too large: {0}")]
    PayloadTooLarge(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Service misconfigured: {0}")]
    Configuration(String),
}

/// Error response structure - error kind plus the raw message
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: String,
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ExternalService(_) => StatusCode::BAD_GATEWAY,
            Self::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => TtsErrorKind::InvalidRequest.as_str(),
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::ExternalService(_) => TtsErrorKind::ProviderError.as_str(),
            Self::Configuration(_) => TtsErrorKind::ConfigurationError.as_str(),
        }
    }

    /// Convert to error response, keeping provider messages as-is
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            Self::BadRequest(msg)
            | Self::PayloadTooLarge(msg)
            | Self::ExternalService(msg)
            | Self::Configuration(msg) => msg.clone(),
        };

        ErrorResponse {
            kind: self.kind().to_string(),
            message,
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::InvalidRequest(msg) => AppError::BadRequest(msg),
            TtsServiceError::Provider(msg) => AppError::ExternalService(msg),
            TtsServiceError::Configuration(msg) => AppError::Configuration(msg),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
