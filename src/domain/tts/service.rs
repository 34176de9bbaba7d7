use super::error::TtsServiceError;
use super::language::Language;
use super::voice::Codec;
use crate::infrastructure::providers::TtsProvider;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    pub audio_data: Vec<u8>,
    pub codec: Codec,
    pub language: Language,
    pub provider: String,
}

/// Host-side entry point in front of a [`TtsProvider`]
pub struct TtsService {
    provider: Arc<dyn TtsProvider>,
}

impl TtsService {
    pub fn new(provider: Arc<dyn TtsProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn TtsProvider> {
        &self.provider
    }

    /// Pick the caller's language override, or the provider default when absent
    fn resolve_language(&self, requested: Option<&str>) -> Result<Language, TtsServiceError> {
        let Some(tag) = requested.map(str::trim).filter(|tag| !tag.is_empty()) else {
            return Ok(self.provider.default_language());
        };

        let language: Language = tag.parse()?;
        if !self.provider.supported_languages().contains(&language) {
            return Err(TtsServiceError::Invalid(format!(
                "language {} is not supported by {}",
                language,
                self.provider.name()
            )));
        }

        Ok(language)
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text with the configured provider
    ///
    /// This operation:
    /// - Rejects empty text
    /// - Resolves the language override against the provider's supported set
    /// - Turns "no audio" from the provider into a dependency error
    async fn synthesize(
        &self,
        text: String,
        language: Option<String>,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: String,
        language: Option<String>,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        if text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let language = self.resolve_language(language.as_deref())?;

        tracing::info!(
            provider = self.provider.name(),
            language = %language,
            text_length = text.len(),
            "Synthesizing text"
        );

        let audio = self
            .provider
            .synthesize(&text, language, None)
            .await
            .ok_or_else(|| {
                TtsServiceError::Dependency(format!(
                    "{} produced no audio",
                    self.provider.name()
                ))
            })?;

        Ok(TtsSynthesisResult {
            audio_data: audio.audio_data,
            codec: audio.codec,
            language,
            provider: self.provider.name().to_string(),
        })
    }
}
