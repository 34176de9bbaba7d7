use super::language::Language;
use super::voice::Codec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Extra per-call options a host may pass along; the Yandex provider ignores them
pub type SynthesisOptions = HashMap<String, serde_json::Value>;

/// Audio produced by a successful synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub codec: Codec,
    pub audio_data: Vec<u8>,
}

/// Request for POST /api/tts/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Response for GET /api/tts/languages
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub default_language: Language,
    pub supported_languages: Vec<Language>,
}
