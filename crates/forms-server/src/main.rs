//! Form pages HTTP Server
//!
//! Axum server for the voice-AI marketing pages. Serves the WASM bundle and
//! relays form submissions to the configured automation webhooks, so the
//! webhook URLs stay out of the browser.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forms_runtime::{
    config::{AGENT_RELAY_PATH, CONTACT_RELAY_PATH},
    WebhookConfig,
};

use crate::handlers::{agent_relay, contact_relay, health_check};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebhookConfig::from_env();
    config.validate()?;

    tracing::info!("Contact webhook: {}", config.contact_url);
    tracing::info!("Agent webhook:   {}", config.agent_url);
    match config.timeout() {
        Some(timeout) => tracing::info!("Webhook timeout: {:?}", timeout),
        None => tracing::info!("Webhook timeout: transport default"),
    }

    let state = AppState {
        contact: Arc::new(config.contact_webhook()?),
        agent: Arc::new(config.agent_webhook()?),
    };

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    let app = build_router(state, &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Form server running on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  POST {} - Contact form relay", CONTACT_RELAY_PATH);
    tracing::info!("  POST {}  - Agent creation relay", AGENT_RELAY_PATH);
    tracing::info!("  GET  /*            - Static bundle from {}", static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route(CONTACT_RELAY_PATH, post(contact_relay))
        .route(AGENT_RELAY_PATH, post(agent_relay))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
