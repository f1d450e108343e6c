mod config;
mod engine;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::engine::gemini::GeminiEngine;
use crate::engine::CareerEngine;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerNexus API v{}", env!("CARGO_PKG_VERSION"));

    // Construct the Gemini engine once at startup and never rebuild it.
    // Without a key the service still serves: /api/health reports the
    // degradation and the AI endpoints answer with an error envelope.
    let engine: Option<Arc<dyn CareerEngine>> = match &config.gemini_api_key {
        Some(key) => {
            info!("Gemini engine initialized (model: {})", engine::gemini::MODEL);
            Some(Arc::new(GeminiEngine::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY is not set; AI endpoints will report the engine unavailable");
            None
        }
    };

    let state = AppState { engine };

    // All /api/* routes must be reachable from any origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
