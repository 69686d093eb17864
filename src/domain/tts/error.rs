#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TtsServiceError {
    /// Caller-supplied request violates a precondition. Never reaches a backend.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The backend rejected or failed the call. Carries the backend message verbatim.
    #[error("provider error: {0}")]
    Provider(String),
    /// Missing or invalid credentials detected while building an adapter.
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtsErrorKind {
    InvalidRequest,
    ProviderError,
    ConfigurationError,
}

impl TtsErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TtsErrorKind::InvalidRequest => "invalid_request",
            TtsErrorKind::ProviderError => "provider_error",
            TtsErrorKind::ConfigurationError => "configuration_error",
        }
    }
}

impl std::fmt::Display for TtsErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TtsServiceError {
    pub fn kind(&self) -> TtsErrorKind {
        match self {
            TtsServiceError::InvalidRequest(_) => TtsErrorKind::InvalidRequest,
            TtsServiceError::Provider(_) => TtsErrorKind::ProviderError,
            TtsServiceError::Configuration(_) => TtsErrorKind::ConfigurationError,
        }
    }

    /// The raw message, without the kind prefix added by `Display`
    pub fn message(&self) -> &str {
        match self {
            TtsServiceError::InvalidRequest(msg)
            | TtsServiceError::Provider(msg)
            | TtsServiceError::Configuration(msg) => msg,
        }
    }
}
