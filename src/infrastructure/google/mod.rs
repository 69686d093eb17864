pub mod tts_client;

pub use tts_client::{
    AudioConfig, AudioEncoding, GoogleTtsApi, GoogleTtsClient, SynthesisInput,
    SynthesizeSpeechRequest, VoiceSelectionParams,
};
