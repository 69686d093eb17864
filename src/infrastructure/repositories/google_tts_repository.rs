use super::tts_repository::TtsRepository;
use crate::domain::tts::{emotion, EmotionPreset, GoogleVoiceOptions, TtsServiceError};
use crate::infrastructure::config::GoogleTtsConfig;
use crate::infrastructure::google::{
    AudioConfig, AudioEncoding, GoogleTtsApi, GoogleTtsClient, SynthesisInput,
    SynthesizeSpeechRequest, VoiceSelectionParams,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Google Cloud TTS implementation of TTS repository.
/// Emotions are rendered through the backend's pitch and speaking rate controls.
pub struct GoogleTtsRepository {
    client: Arc<dyn GoogleTtsApi>,
}

impl GoogleTtsRepository {
    pub fn new(client: Arc<dyn GoogleTtsApi>) -> Self {
        Self { client }
    }

    /// Build the repository with a REST client, failing when no API key is configured
    pub fn from_config(config: &GoogleTtsConfig) -> Result<Self, TtsServiceError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            TtsServiceError::Configuration("GOOGLE_TTS_API_KEY is not set".to_string())
        })?;

        let client = GoogleTtsClient::new(api_key, config)?;
        Ok(Self::new(Arc::new(client)))
    }

    fn build_request(
        text: &str,
        options: &GoogleVoiceOptions,
        preset: &EmotionPreset,
    ) -> SynthesizeSpeechRequest {
        SynthesizeSpeechRequest {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelectionParams {
                language_code: options.language_code.clone(),
                name: options.voice_name.clone(),
                ssml_gender: options.gender,
            },
            audio_config: AudioConfig {
                audio_encoding: AudioEncoding::Mp3,
                pitch: preset.pitch_semitones,
                speaking_rate: preset.rate_multiplier,
            },
        }
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    type Options = GoogleVoiceOptions;

    async fn synthesize(&self, text: &str, options: &GoogleVoiceOptions) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let preset = emotion::lookup(options.emotion.as_deref().unwrap_or_default());
        let request = Self::build_request(text, options, preset);

        tracing::info!(
            language = %options.language_code,
            voice = %options.voice_name,
            gender = options.gender.as_str(),
            emotion = preset.id,
            pitch = request.audio_config.pitch,
            speaking_rate = request.audio_config.speaking_rate,
            text_length = text.len(),
            "Calling Google Cloud TTS synthesize"
        );

        let audio_data = self.client.synthesize_speech(&request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                language = %options.language_code,
                voice = %options.voice_name,
                text_length = text.len(),
                "Google Cloud TTS synthesize failed"
            );
            e
        })?;

        tracing::info!(
            provider = "google",
            voice = %options.voice_name,
            emotion = preset.id,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
