use super::emotion::{self, EmotionPreset};
use super::error::TtsServiceError;
use super::request::{
    GoogleVoiceOptions, OpenAiVoice, OpenAiVoiceOptions, Provider, SpeechModelTier,
    SynthesisRequest, VoiceGender,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE_CODE: &str = "pt-BR";
pub const DEFAULT_GOOGLE_VOICE: &str = "pt-BR-Wavenet-A";
pub const DEFAULT_GENDER: &str = "FEMALE";
pub const DEFAULT_OPENAI_VOICE: &str = "nova";
pub const DEFAULT_OPENAI_MODEL: &str = "tts-1";

/// Google voice types offered to clients
pub const GOOGLE_VOICE_TYPES: [&str; 3] = ["pt-BR-Wavenet-A", "pt-BR-Wavenet-B", "pt-BR-Wavenet-C"];

/// Request for POST /api/tts/synthesize, tagged by provider
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum TtsRequest {
    #[serde(rename = "google")]
    Google {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        emotion: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gender: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        voice: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language_code: Option<String>,
    },
    #[serde(rename = "openai")]
    OpenAi {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        voice: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
    },
}

impl TtsRequest {
    pub fn text(&self) -> &str {
        match self {
            TtsRequest::Google { text, .. } | TtsRequest::OpenAi { text, .. } => text,
        }
    }
}

impl TryFrom<TtsRequest> for SynthesisRequest {
    type Error = TtsServiceError;

    fn try_from(request: TtsRequest) -> Result<Self, Self::Error> {
        match request {
            TtsRequest::Google {
                text,
                emotion,
                gender,
                voice,
                language_code,
            } => Ok(SynthesisRequest::google(
                text,
                GoogleVoiceOptions {
                    language_code: language_code
                        .unwrap_or_else(|| DEFAULT_LANGUAGE_CODE.to_string()),
                    voice_name: voice.unwrap_or_else(|| DEFAULT_GOOGLE_VOICE.to_string()),
                    gender: gender.as_deref().unwrap_or(DEFAULT_GENDER).parse()?,
                    emotion,
                },
            )),
            TtsRequest::OpenAi { text, voice, model } => Ok(SynthesisRequest::openai(
                text,
                OpenAiVoiceOptions {
                    voice: voice.as_deref().unwrap_or(DEFAULT_OPENAI_VOICE).parse()?,
                    model: model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL).parse()?,
                },
            )),
        }
    }
}

/// Response for GET /api/tts/emotions
#[derive(Debug, Serialize, Deserialize)]
pub struct EmotionResponse {
    pub id: String,
    pub name: String,
    pub pitch: f64,
    pub speaking_rate: f64,
}

impl From<&EmotionPreset> for EmotionResponse {
    fn from(preset: &EmotionPreset) -> Self {
        Self {
            id: preset.id.to_string(),
            name: preset.display_name.to_string(),
            pitch: preset.pitch_semitones,
            speaking_rate: preset.rate_multiplier,
        }
    }
}

pub fn emotion_catalogue() -> Vec<EmotionResponse> {
    emotion::all().iter().map(EmotionResponse::from).collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceOptionResponse {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderVoicesResponse {
    pub provider: Provider,
    pub supports_emotion: bool,
    pub voices: Vec<VoiceOptionResponse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genders: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
    /// Shown to clients for providers without emotion support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response for GET /api/tts/voices
pub fn voice_catalogue() -> Vec<ProviderVoicesResponse> {
    vec![
        ProviderVoicesResponse {
            provider: Provider::Google,
            supports_emotion: Provider::Google.supports_emotion(),
            voices: GOOGLE_VOICE_TYPES
                .iter()
                .map(|voice| VoiceOptionResponse {
                    id: voice.to_string(),
                    description: voice.replace("pt-BR-Wavenet-", "Type "),
                })
                .collect(),
            genders: VoiceGender::ALL
                .iter()
                .map(|gender| gender.as_str().to_string())
                .collect(),
            models: Vec::new(),
            note: None,
        },
        ProviderVoicesResponse {
            provider: Provider::OpenAi,
            supports_emotion: Provider::OpenAi.supports_emotion(),
            voices: OpenAiVoice::ALL
                .iter()
                .map(|voice| VoiceOptionResponse {
                    id: voice.as_str().to_string(),
                    description: voice.description().to_string(),
                })
                .collect(),
            genders: Vec::new(),
            models: SpeechModelTier::ALL
                .iter()
                .map(|tier| tier.as_str().to_string())
                .collect(),
            note: Some(
                "OpenAI voices do not support pitch or rate adjustments; pick a voice for its character instead"
                    .to_string(),
            ),
        },
    ]
}
