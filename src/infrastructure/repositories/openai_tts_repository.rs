use super::tts_repository::TtsRepository;
use crate::domain::tts::{OpenAiVoice, OpenAiVoiceOptions, SpeechModelTier, TtsServiceError};
use crate::infrastructure::config::OpenAiTtsConfig;
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{CreateSpeechRequest, SpeechModel, SpeechResponseFormat, Voice},
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::sync::Arc;
use std::time::Duration;

/// The single network call OpenAI-backed synthesis depends on
#[async_trait]
pub trait OpenAiSpeechApi: Send + Sync {
    /// Returns the audio body, or the backend's error message verbatim
    async fn create_speech(&self, request: CreateSpeechRequest) -> Result<Vec<u8>, String>;
}

#[async_trait]
impl OpenAiSpeechApi for Client<OpenAIConfig> {
    async fn create_speech(&self, request: CreateSpeechRequest) -> Result<Vec<u8>, String> {
        let response = self.audio().speech(request).await.map_err(|e| match e {
            OpenAIError::ApiError(api_error) => api_error.message,
            OpenAIError::Reqwest(transport_error) => transport_error.to_string(),
            other => other.to_string(),
        })?;

        Ok(response.bytes.to_vec())
    }
}

/// OpenAI TTS implementation of TTS repository.
/// OpenAI voices expose no pitch or rate controls, so no emotion is applied here.
pub struct OpenAiTtsRepository {
    client: Arc<dyn OpenAiSpeechApi>,
}

impl OpenAiTtsRepository {
    pub fn new(client: Arc<dyn OpenAiSpeechApi>) -> Self {
        Self { client }
    }

    /// Build the repository with an SDK client, failing when no API key is configured.
    /// The client makes a single attempt per call, bounded by the configured timeout.
    pub fn from_config(config: &OpenAiTtsConfig) -> Result<Self, TtsServiceError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            TtsServiceError::Configuration("OPENAI_API_KEY is not set".to_string())
        })?;

        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(api_base) = &config.api_base {
            openai_config = openai_config.with_api_base(api_base);
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                TtsServiceError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        // The SDK retries rate-limited calls until this budget runs out
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Ok(Self::new(Arc::new(Client::build(
            http_client,
            openai_config,
            no_retry,
        ))))
    }

    fn speech_model(tier: SpeechModelTier) -> SpeechModel {
        match tier {
            SpeechModelTier::Standard => SpeechModel::Tts1,
            SpeechModelTier::HighDefinition => SpeechModel::Tts1Hd,
        }
    }

    fn voice(voice: OpenAiVoice) -> Voice {
        match voice {
            OpenAiVoice::Alloy => Voice::Alloy,
            OpenAiVoice::Echo => Voice::Echo,
            OpenAiVoice::Fable => Voice::Fable,
            OpenAiVoice::Onyx => Voice::Onyx,
            OpenAiVoice::Nova => Voice::Nova,
            OpenAiVoice::Shimmer => Voice::Shimmer,
        }
    }
}

#[async_trait]
impl TtsRepository for OpenAiTtsRepository {
    type Options = OpenAiVoiceOptions;

    async fn synthesize(&self, text: &str, options: &OpenAiVoiceOptions) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %options.model,
            voice = %options.voice,
            text_length = text.len(),
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: Self::speech_model(options.model),
            input: text.to_string(),
            voice: Self::voice(options.voice),
            response_format: Some(SpeechResponseFormat::Mp3),
            speed: None, // Defaults to 1.0
        };

        let audio_data = self.client.create_speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %options.model,
                voice = %options.voice,
                text_length = text.len(),
                "OpenAI TTS API call failed"
            );
            e
        })?;

        tracing::info!(
            provider = "openai",
            model = %options.model,
            voice = %options.voice,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
