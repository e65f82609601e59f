mod advisor;
mod chat;
mod config;
mod credentials;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::CareerAdvisor;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let gemini = GeminiClient::new(config.gemini_api_url.clone(), config.request_timeout)?;
    info!(
        "LLM client initialized (endpoint: {}, timeout: {}s)",
        gemini.endpoint(),
        config.request_timeout.as_secs()
    );

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set: serving offline answers until a key is provided");
    }

    // One advisor for the whole process, handed to every handler through AppState
    let advisor = CareerAdvisor::new(Arc::new(gemini), config.gemini_api_key.clone());
    let state = AppState::new(advisor);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser front-end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
