use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{
        dto::{emotion_catalogue, voice_catalogue, EmotionResponse, ProviderVoicesResponse, TtsRequest},
        SynthesisRequest, TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
};

const MAX_TEXT_CHARS: usize = 10_000;
const DOWNLOAD_DISPOSITION: &str = "attachment; filename=\"speech.mp3\"";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts/synthesize - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let char_count = request.text().chars().count();

        if char_count > MAX_TEXT_CHARS {
            return Err(AppError::PayloadTooLarge(
                "Text must be 10,000 characters or less".to_string(),
            ));
        }

        let request = SynthesisRequest::try_from(request)?;
        let audio = controller.tts_service.synthesize(request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(audio.mime_type));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(DOWNLOAD_DISPOSITION),
        );
        headers.insert(
            "x-tts-provider",
            HeaderValue::from_static(audio.provider.as_str()),
        );
        headers.insert("x-character-count", HeaderValue::from(char_count));

        Ok((StatusCode::OK, headers, Body::from(audio.audio_data)))
    }

    /// GET /api/tts/emotions - List emotion presets
    pub async fn list_emotions() -> Json<Vec<EmotionResponse>> {
        Json(emotion_catalogue())
    }

    /// GET /api/tts/voices - List voices per provider
    pub async fn list_voices() -> Json<Vec<ProviderVoicesResponse>> {
        Json(voice_catalogue())
    }
}
