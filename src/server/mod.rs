pub mod handlers;
pub mod templates;
pub mod types;

use crate::{
    Result,
    config::{API_KEY_ENV, Config, ServerConfig},
    inference::InferenceService,
    llm::create_llm_client,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/ai_html",
            get(handlers::ai_html_page).post(handlers::ai_html_submit),
        )
        .route(
            "/qr_generator",
            get(handlers::qr_generator_page).post(handlers::qr_generator_submit),
        )
        .route("/api/ai/inference", post(handlers::api_inference))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener; `host` may be an IP address or a hostname.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    Ok(TcpListener::bind((server.host.as_str(), server.port)).await?)
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.api_key.is_empty() {
        warn!(
            "{} is not set; inference requests will fail upstream",
            API_KEY_ENV
        );
    }

    // One client for the whole process, shared read-only by every request
    let llm = create_llm_client(&config.llm)?;
    info!(
        "Using {:?} provider with model {}",
        config.llm.provider, config.llm.model
    );

    let app_state = AppState::new(InferenceService::new(llm), config.qr.clone());
    let app = router(app_state);

    let listener = bind(&config.server).await?;

    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
