use super::tts_provider::TtsProvider;
use crate::domain::tts::{Language, SynthesisError, SynthesisOptions, SynthesizedAudio};
use crate::infrastructure::config::{ProviderConfig, DEFAULT_YANDEX_API_URL};
use crate::infrastructure::observability::{SynthesisObserver, TracingObserver};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const PROVIDER_NAME: &str = "YandexTTS";

/// Upper bound for one full exchange: send, headers and body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Yandex SpeechKit implementation of the TTS provider
pub struct YandexTtsProvider {
    config: ProviderConfig,
    http_client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    observer: Arc<dyn SynthesisObserver>,
}

impl YandexTtsProvider {
    pub fn new(config: ProviderConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
            endpoint: DEFAULT_YANDEX_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn SynthesisObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Query string of one synthesis request, in the order the API documents it
    pub fn query_params(&self, text: &str, language: Language) -> Vec<(&'static str, String)> {
        vec![
            ("text", text.to_string()),
            ("lang", language.as_str().to_string()),
            ("key", self.config.api_key.clone()),
            ("speaker", self.config.voice.as_str().to_string()),
            ("format", self.config.codec.as_str().to_string()),
            ("emotion", self.config.emotion.as_str().to_string()),
            ("speed", self.config.speed.to_string()),
        ]
    }

    /// Run one synthesis round trip and keep the reason when it fails
    ///
    /// The whole exchange races against the provider timeout. Whichever way
    /// it ends, the response handle has been released by the time this
    /// returns.
    pub async fn fetch_audio(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let params = self.query_params(text, language);

        tokio::time::timeout(self.timeout, self.exchange(&params))
            .await
            .map_err(|_| SynthesisError::Timeout(self.timeout))?
    }

    async fn exchange(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<SynthesizedAudio, SynthesisError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await?;

        let mut response = ResponseHandle::new(response, self.observer.as_ref());

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SynthesisError::Remote {
                status,
                url: redact_key(response.url()),
            });
        }

        let audio_data = response.read_body().await?;

        Ok(SynthesizedAudio {
            codec: self.config.codec,
            audio_data,
        })
    }
}

#[async_trait]
impl TtsProvider for YandexTtsProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn default_language(&self) -> Language {
        self.config.language
    }

    fn supported_languages(&self) -> &'static [Language] {
        Language::ALL
    }

    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        options: Option<&SynthesisOptions>,
    ) -> Option<SynthesizedAudio> {
        if let Some(options) = options.filter(|options| !options.is_empty()) {
            let mut option_keys: Vec<&str> = options.keys().map(String::as_str).collect();
            option_keys.sort_unstable();
            self.observer.options_ignored(&option_keys);
        }

        let start_time = Instant::now();

        match self.fetch_audio(text, language).await {
            Ok(audio) => {
                self.observer.synthesis_completed(
                    audio.codec,
                    audio.audio_data.len(),
                    start_time.elapsed(),
                );
                Some(audio)
            }
            Err(err) => {
                self.observer.synthesis_failed(&err);
                None
            }
        }
    }
}

/// Scoped owner of a SpeechKit response
///
/// Dropping it releases the connection, which covers early returns, errors
/// and cancellation of the surrounding future alike.
struct ResponseHandle<'a> {
    response: reqwest::Response,
    observer: &'a dyn SynthesisObserver,
}

impl<'a> ResponseHandle<'a> {
    fn new(response: reqwest::Response, observer: &'a dyn SynthesisObserver) -> Self {
        Self { response, observer }
    }

    fn status(&self) -> reqwest::StatusCode {
        self.response.status()
    }

    fn url(&self) -> &reqwest::Url {
        self.response.url()
    }

    async fn read_body(&mut self) -> Result<Vec<u8>, reqwest::Error> {
        let mut body = Vec::new();
        while let Some(chunk) = self.response.chunk().await? {
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

impl Drop for ResponseHandle<'_> {
    fn drop(&mut self) {
        // the response field is dropped right after this returns
        self.observer.response_released(self.response.status());
    }
}

/// Render a request URL with the API key masked
fn redact_key(url: &reqwest::Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}
