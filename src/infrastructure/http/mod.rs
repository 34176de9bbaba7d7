pub mod request_id;

pub use request_id::{
    make_request_span, request_id_middleware, request_id_of, RequestId, X_REQUEST_ID,
};

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;
use crate::infrastructure::providers::TtsProvider;

/// Build the application router with all routes and middleware
pub fn build_router(provider: Arc<dyn TtsProvider>, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route("/api/tts/synthesize", axum::routing::post(TtsController::synthesize))
        .route("/api/tts/languages", get(TtsController::languages))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(provider)
        .merge(tts_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span)),
        )
}

/// Start the HTTP server on the configured address
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
