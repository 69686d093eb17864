use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts one underlying TTS provider (Google Cloud TTS, OpenAI, ...)
///
/// Implementations are responsible for:
/// - Translating provider-specific voice options into the native request
/// - Performing exactly one backend call per synthesis, without retries
/// - Returning the encoded audio exactly as the backend produced it
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Voice settings understood by this provider
    type Options: Send + Sync;

    /// Synthesize text to speech with the provider's voice options
    ///
    /// Returns MP3 audio ready for playback
    ///
    /// # Errors
    /// Returns the backend's failure message verbatim
    async fn synthesize(&self, text: &str, options: &Self::Options) -> Result<Vec<u8>, String>;
}
