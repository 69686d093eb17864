pub mod dto;
pub mod emotion;
pub mod error;
pub mod request;
pub mod service;

pub use emotion::EmotionPreset;
pub use error::{TtsErrorKind, TtsServiceError};
pub use request::{
    GoogleVoiceOptions, OpenAiVoice, OpenAiVoiceOptions, Provider, SpeechModelTier,
    SynthesisRequest, SynthesizedAudio, VoiceGender, VoiceOptions, AUDIO_MPEG,
};
pub use service::{TtsService, TtsServiceApi};
