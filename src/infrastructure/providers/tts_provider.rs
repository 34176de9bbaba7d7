use crate::domain::tts::{Language, SynthesisOptions, SynthesizedAudio};
use async_trait::async_trait;

/// Capability a host needs from a text-to-speech backend.
///
/// Implementations are responsible for:
/// - Reporting the configured default language and the fixed supported set
/// - Turning one piece of text into audio with a single bounded round trip
/// - Logging their own failures; the host only sees "no audio"
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Display name of the backend
    fn name(&self) -> &str;

    fn default_language(&self) -> Language;

    fn supported_languages(&self) -> &'static [Language];

    /// Synthesize text to speech
    ///
    /// Returns the codec and the raw audio bytes, or `None` when the backend
    /// produced no audio for any reason.
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `language` - Language to speak in, overriding the configured default
    /// * `options` - Extra host options, which a provider may ignore
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        options: Option<&SynthesisOptions>,
    ) -> Option<SynthesizedAudio>;
}
