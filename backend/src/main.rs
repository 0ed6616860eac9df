use dotenvy::dotenv;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;
use anyhow::Context;

mod handlers {
    pub mod ai_dtos;
    pub mod ai_handlers;
}
mod api {
    pub mod gemini;
    pub mod gemini_dtos;
}
mod config {
    pub mod app_config;
}
mod utils {
    pub mod upload;
}
mod error;

use api::gemini::GeminiClient;
use config::app_config::AppConfig;
use handlers::ai_handlers;

pub struct AppState {
    pub config: AppConfig,
    pub gemini: GeminiClient,
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    // Unknown paths fall through to the SPA so client-side routes survive a reload.
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let edit_limit = ai_handlers::edit_body_limit(state.config.upload_max_bytes);

    let ai_routes = Router::new()
        .route("/api/ai/status", get(ai_handlers::status))
        .route("/api/ai/chat", post(ai_handlers::chat))
        .route("/api/ai/refine", post(ai_handlers::refine))
        .route("/api/ai/image/generate", post(ai_handlers::generate_image))
        .route(
            "/api/ai/image/edit",
            post(ai_handlers::edit_image).layer(DefaultBodyLimit::max(edit_limit)),
        );

    Router::new()
        .route("/api/health", get(ai_handlers::health_check))
        .merge(ai_routes)
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    if !config.credential_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; AI features will report a missing credential");
    }

    let gemini = GeminiClient::new(&config).context("Failed to build the HTTP client")?;
    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState { config, gemini });

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("ConsentWerft gateway listening on {}", bind_addr);

    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
