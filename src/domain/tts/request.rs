use super::error::TtsServiceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Synthesis backends the service can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "google")]
    Google,
    #[serde(rename = "openai")]
    OpenAi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::OpenAi => "openai",
        }
    }

    /// Whether the backend exposes pitch/rate controls for emotion presets.
    /// OpenAI voices have fixed prosody, so emotions are not available there.
    pub fn supports_emotion(&self) -> bool {
        matches!(self, Provider::Google)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// SSML voice gender accepted by Google Cloud Text-to-Speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceGender {
    Female,
    Male,
    Neutral,
}

impl VoiceGender {
    pub const ALL: [VoiceGender; 3] = [VoiceGender::Female, VoiceGender::Male, VoiceGender::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceGender::Female => "FEMALE",
            VoiceGender::Male => "MALE",
            VoiceGender::Neutral => "NEUTRAL",
        }
    }
}

impl FromStr for VoiceGender {
    type Err = TtsServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FEMALE" => Ok(VoiceGender::Female),
            "MALE" => Ok(VoiceGender::Male),
            "NEUTRAL" => Ok(VoiceGender::Neutral),
            _ => Err(TtsServiceError::InvalidRequest(format!(
                "unsupported voice gender '{}', expected one of FEMALE, MALE, NEUTRAL",
                s
            ))),
        }
    }
}

/// Fixed OpenAI voice set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAiVoice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl OpenAiVoice {
    pub const ALL: [OpenAiVoice; 6] = [
        OpenAiVoice::Alloy,
        OpenAiVoice::Echo,
        OpenAiVoice::Fable,
        OpenAiVoice::Onyx,
        OpenAiVoice::Nova,
        OpenAiVoice::Shimmer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpenAiVoice::Alloy => "alloy",
            OpenAiVoice::Echo => "echo",
            OpenAiVoice::Fable => "fable",
            OpenAiVoice::Onyx => "onyx",
            OpenAiVoice::Nova => "nova",
            OpenAiVoice::Shimmer => "shimmer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OpenAiVoice::Alloy => "Balanced",
            OpenAiVoice::Echo => "Soft",
            OpenAiVoice::Fable => "Expressive",
            OpenAiVoice::Onyx => "Powerful",
            OpenAiVoice::Nova => "Friendly",
            OpenAiVoice::Shimmer => "Upbeat",
        }
    }
}

impl FromStr for OpenAiVoice {
    type Err = TtsServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let voice = s.to_lowercase();
        OpenAiVoice::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == voice)
            .ok_or_else(|| {
                TtsServiceError::InvalidRequest(format!("unsupported OpenAI voice '{}'", s))
            })
    }
}

impl std::fmt::Display for OpenAiVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// OpenAI speech model quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechModelTier {
    /// `tts-1`
    Standard,
    /// `tts-1-hd`
    HighDefinition,
}

impl SpeechModelTier {
    pub const ALL: [SpeechModelTier; 2] = [SpeechModelTier::Standard, SpeechModelTier::HighDefinition];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechModelTier::Standard => "tts-1",
            SpeechModelTier::HighDefinition => "tts-1-hd",
        }
    }
}

impl FromStr for SpeechModelTier {
    type Err = TtsServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tts-1" => Ok(SpeechModelTier::Standard),
            "tts-1-hd" => Ok(SpeechModelTier::HighDefinition),
            other => Err(TtsServiceError::InvalidRequest(format!(
                "unsupported OpenAI model '{}', expected tts-1 or tts-1-hd",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SpeechModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoogleVoiceOptions {
    pub language_code: String,
    pub voice_name: String,
    pub gender: VoiceGender,
    /// Emotion preset id; absent or unknown ids resolve to neutral
    pub emotion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenAiVoiceOptions {
    pub voice: OpenAiVoice,
    pub model: SpeechModelTier,
}

/// Provider-specific voice settings. The variant selects the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceOptions {
    Google(GoogleVoiceOptions),
    OpenAi(OpenAiVoiceOptions),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: VoiceOptions,
}

impl SynthesisRequest {
    pub fn google(text: impl Into<String>, options: GoogleVoiceOptions) -> Self {
        Self {
            text: text.into(),
            voice: VoiceOptions::Google(options),
        }
    }

    pub fn openai(text: impl Into<String>, options: OpenAiVoiceOptions) -> Self {
        Self {
            text: text.into(),
            voice: VoiceOptions::OpenAi(options),
        }
    }

    pub fn provider(&self) -> Provider {
        match self.voice {
            VoiceOptions::Google(_) => Provider::Google,
            VoiceOptions::OpenAi(_) => Provider::OpenAi,
        }
    }
}

/// Successful synthesis output, owned by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub audio_data: Vec<u8>,
    pub mime_type: &'static str,
    pub provider: Provider,
}

impl SynthesizedAudio {
    pub fn mpeg(audio_data: Vec<u8>, provider: Provider) -> Self {
        Self {
            audio_data,
            mime_type: AUDIO_MPEG,
            provider,
        }
    }
}
