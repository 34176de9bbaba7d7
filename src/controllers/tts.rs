use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{
        dto::{LanguagesResponse, TtsRequest},
        TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
};

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
        let result = controller
            .tts_service
            .synthesize(request.text, request.language)
            .await?;

        let provider = HeaderValue::from_str(&result.provider)
            .map_err(|e| AppError::Internal(format!("Invalid provider name header: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(result.codec.mime_type()),
        );
        headers.insert("X-Audio-Codec", HeaderValue::from_static(result.codec.as_str()));
        headers.insert("X-Language", HeaderValue::from_static(result.language.as_str()));
        headers.insert("X-Tts-Provider", provider);

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }

    /// GET /api/tts/languages - Default and supported languages of the provider
    pub async fn languages(
        State(controller): State<Arc<TtsController>>,
    ) -> Json<LanguagesResponse> {
        let provider = controller.tts_service.provider();

        Json(LanguagesResponse {
            default_language: provider.default_language(),
            supported_languages: provider.supported_languages().to_vec(),
        })
    }
}
