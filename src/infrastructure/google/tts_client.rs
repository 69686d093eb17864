use crate::domain::tts::{TtsServiceError, VoiceGender};
use crate::infrastructure::config::GoogleTtsConfig;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

/// Body of `text:synthesize`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeSpeechRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelectionParams,
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelectionParams {
    pub language_code: String,
    pub name: String,
    pub ssml_gender: VoiceGender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
    pub pitch: f64,
    pub speaking_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    Mp3,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeSpeechResponse {
    audio_content: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// The single network call Google-backed synthesis depends on
#[async_trait]
pub trait GoogleTtsApi: Send + Sync {
    /// Returns decoded audio bytes, or the backend's error message verbatim
    async fn synthesize_speech(&self, request: &SynthesizeSpeechRequest) -> Result<Vec<u8>, String>;
}

/// REST client for Google Cloud Text-to-Speech, authenticated by API key
pub struct GoogleTtsClient {
    api_key: String,
    synthesize_url: String,
    http_client: reqwest::Client,
}

impl GoogleTtsClient {
    pub fn new(api_key: String, config: &GoogleTtsConfig) -> Result<Self, TtsServiceError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                TtsServiceError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            synthesize_url: format!(
                "{}{}",
                config.endpoint.trim_end_matches('/'),
                SYNTHESIZE_PATH
            ),
            http_client,
        })
    }
}

#[async_trait]
impl GoogleTtsApi for GoogleTtsClient {
    async fn synthesize_speech(&self, request: &SynthesizeSpeechRequest) -> Result<Vec<u8>, String> {
        let response = self
            .http_client
            .post(&self.synthesize_url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        let payload: SynthesizeSpeechResponse = response
            .json()
            .await
            .map_err(|e| format!("Invalid Google TTS response: {}", e))?;

        STANDARD
            .decode(payload.audio_content)
            .map_err(|e| format!("Invalid Google TTS audio content: {}", e))
    }
}

/// Extract `error.message` from a Google error body, falling back to the raw body
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<GoogleErrorEnvelope>(body) {
        return envelope.error.message;
    }

    if body.trim().is_empty() {
        status.to_string()
    } else {
        body.trim().to_string()
    }
}
