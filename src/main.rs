use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yandex_tts::controllers::tts::TtsController;
use yandex_tts::domain::tts::TtsService;
use yandex_tts::infrastructure::config::{Config, LogFormat};
use yandex_tts::infrastructure::http::{build_router, start_http_server};
use yandex_tts::infrastructure::providers::get_engine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Yandex TTS provider on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        language = %config.provider.language,
        codec = %config.provider.codec,
        voice = %config.provider.voice,
        emotion = %config.provider.emotion,
        speed = %config.provider.speed,
        endpoint = %config.yandex_api_url,
        "Provider configuration loaded"
    );

    // Shared connection pool for every synthesis call
    let http_client = reqwest::Client::new();

    let provider = get_engine(&config, http_client);
    tracing::info!(provider = provider.name(), "TTS provider registered");

    let tts_service = Arc::new(TtsService::new(provider.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    let app = build_router(provider, tts_controller);

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "yandex_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "yandex_tts=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
