use crate::error::AppError;
use std::time::Duration;

/// A provider setting outside its enumerated set or range
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingError {
    #[error("unsupported {setting}: {value}")]
    Unsupported { setting: &'static str, value: String },
    #[error("speed {0} is outside 0.1..=3.0")]
    SpeedOutOfRange(f64),
}

impl SettingError {
    pub fn unsupported(setting: &'static str, value: &str) -> Self {
        SettingError::Unsupported {
            setting,
            value: value.to_string(),
        }
    }
}

/// Why a single synthesis call produced no audio
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("text to synthesize is empty")]
    EmptyText,
    #[error("Error {status} on load url {url}")]
    Remote {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("Timeout for yandex speech kit api after {0:?}")]
    Timeout(Duration),
    #[error("Timeout for yandex speech kit api: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<SettingError> for TtsServiceError {
    fn from(err: SettingError) -> Self {
        TtsServiceError::Invalid(err.to_string())
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Dependency(msg) => AppError::ExternalService(msg),
        }
    }
}
