use crate::domain::tts::{Codec, Emotion, Language, SettingError, Speed, Voice};
use serde::Deserialize;
use std::env;

pub const DEFAULT_YANDEX_API_URL: &str = "https://tts.voicetech.yandex.net/generate";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error(transparent)]
    Setting(#[from] SettingError),
    #[error("invalid provider configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Settings of the Yandex provider, fixed for its whole lifetime
///
/// Deserializes from the host's configuration mapping. Every key except
/// `api_key` has a default, and keys the provider does not know about
/// (such as the host's `platform`) are ignored.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub codec: Codec,
    #[serde(default)]
    pub voice: Voice,
    #[serde(default)]
    pub emotion: Emotion,
    #[serde(default)]
    pub speed: Speed,
}

impl ProviderConfig {
    /// Config with the given key and every other setting at its default
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language: Language::default(),
            codec: Codec::default(),
            voice: Voice::default(),
            emotion: Emotion::default(),
            speed: Speed::default(),
        }
    }

    /// Build from the host's configuration mapping
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("YANDEX_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("YANDEX_API_KEY"))?;

        let mut config = Self::new(api_key);
        if let Ok(language) = env::var("TTS_LANGUAGE") {
            config.language = language.parse()?;
        }
        if let Ok(codec) = env::var("TTS_CODEC") {
            config.codec = codec.parse()?;
        }
        if let Ok(voice) = env::var("TTS_VOICE") {
            config.voice = voice.parse()?;
        }
        if let Ok(emotion) = env::var("TTS_EMOTION") {
            config.emotion = emotion.parse()?;
        }
        if let Ok(speed) = env::var("TTS_SPEED") {
            config.speed = speed.parse()?;
        }

        Ok(config)
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"***")
            .field("language", &self.language)
            .field("codec", &self.codec)
            .field("voice", &self.voice)
            .field("emotion", &self.emotion)
            .field("speed", &self.speed)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub yandex_api_url: String,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            yandex_api_url: env::var("YANDEX_TTS_URL")
                .unwrap_or_else(|_| DEFAULT_YANDEX_API_URL.to_string()),
            provider: ProviderConfig::from_env()?,
        };

        Ok(config)
    }
}
