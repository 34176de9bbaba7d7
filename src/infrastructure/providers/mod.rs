pub mod tts_provider;
pub mod yandex_tts_provider;

pub use tts_provider::TtsProvider;
pub use yandex_tts_provider::{YandexTtsProvider, DEFAULT_TIMEOUT, PROVIDER_NAME};

use crate::infrastructure::config::Config;
use std::sync::Arc;

/// Build the provider the host registers for this backend
pub fn get_engine(config: &Config, http_client: reqwest::Client) -> Arc<dyn TtsProvider> {
    Arc::new(
        YandexTtsProvider::new(config.provider.clone(), http_client)
            .with_endpoint(config.yandex_api_url.clone()),
    )
}
