use super::error::TtsServiceError;
use super::request::{
    GoogleVoiceOptions, OpenAiVoiceOptions, SynthesisRequest, SynthesizedAudio, VoiceOptions,
};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub type GoogleTtsBackend = Arc<dyn TtsRepository<Options = GoogleVoiceOptions>>;
pub type OpenAiTtsBackend = Arc<dyn TtsRepository<Options = OpenAiVoiceOptions>>;

/// Single entry point for speech synthesis across providers.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
pub struct TtsService {
    google_repo: GoogleTtsBackend,
    openai_repo: OpenAiTtsBackend,
}

impl TtsService {
    pub fn new(google_repo: GoogleTtsBackend, openai_repo: OpenAiTtsBackend) -> Self {
        Self {
            google_repo,
            openai_repo,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech with the provider selected by the request's voice options
    ///
    /// This operation:
    /// - Rejects empty text before any network activity
    /// - Calls exactly one provider, exactly once
    /// - Reports provider failures verbatim, without retry or fallback
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, TtsServiceError> {
        let provider = request.provider();

        tracing::info!(
            provider = %provider,
            text_length = request.text.len(),
            "TTS synthesis request"
        );

        if request.text.is_empty() {
            tracing::warn!(provider = %provider, "Rejecting TTS request with empty text");
            return Err(TtsServiceError::InvalidRequest(
                "Text cannot be empty".to_string(),
            ));
        }

        tracing::debug!(provider = %provider, "TTS request validated, dispatching");

        let outcome = match &request.voice {
            VoiceOptions::Google(options) => {
                self.google_repo.synthesize(&request.text, options).await
            }
            VoiceOptions::OpenAi(options) => {
                self.openai_repo.synthesize(&request.text, options).await
            }
        };

        match outcome {
            Ok(audio_data) => {
                tracing::info!(
                    provider = %provider,
                    audio_size_bytes = audio_data.len(),
                    "TTS synthesis succeeded"
                );
                Ok(SynthesizedAudio::mpeg(audio_data, provider))
            }
            Err(message) => {
                tracing::error!(
                    provider = %provider,
                    error = %message,
                    "TTS synthesis failed"
                );
                Err(TtsServiceError::Provider(message))
            }
        }
    }
}
