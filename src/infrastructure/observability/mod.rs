use crate::domain::tts::{Codec, SynthesisError};
use std::time::Duration;

/// Receives the events of a provider's synthesis calls
///
/// Providers hold one of these instead of logging through a global, so a host
/// can route them wherever it wants. [`TracingObserver`] is the default.
pub trait SynthesisObserver: Send + Sync {
    /// A call ended without audio
    fn synthesis_failed(&self, error: &SynthesisError);

    /// A call returned audio
    fn synthesis_completed(&self, codec: Codec, audio_size: usize, latency: Duration);

    /// A response handle was given back, on any exit path
    fn response_released(&self, status: reqwest::StatusCode);

    /// The caller passed options the provider does not use
    fn options_ignored(&self, option_keys: &[&str]);
}

/// Emits every synthesis event through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SynthesisObserver for TracingObserver {
    fn synthesis_failed(&self, error: &SynthesisError) {
        match error {
            SynthesisError::Remote { status, url } => {
                tracing::error!(
                    status = status.as_u16(),
                    url = %url,
                    "Error {} on load url {}.",
                    status.as_u16(),
                    url
                );
            }
            SynthesisError::Timeout(after) => {
                tracing::error!(
                    timeout_ms = after.as_millis() as u64,
                    "Timeout for yandex speech kit api."
                );
            }
            SynthesisError::Transport(e) => {
                tracing::error!(error = %e, "Timeout for yandex speech kit api.");
            }
            SynthesisError::EmptyText => {
                tracing::warn!("Refusing to synthesize empty text");
            }
        }
    }

    fn synthesis_completed(&self, codec: Codec, audio_size: usize, latency: Duration) {
        tracing::info!(
            provider = "yandex",
            codec = %codec,
            audio_size_bytes = audio_size,
            latency_ms = latency.as_millis() as u64,
            "TTS synthesis completed"
        );
    }

    fn response_released(&self, status: reqwest::StatusCode) {
        tracing::debug!(status = status.as_u16(), "SpeechKit response released");
    }

    fn options_ignored(&self, option_keys: &[&str]) {
        tracing::debug!(option_keys = ?option_keys, "Ignoring extra synthesis options");
    }
}
