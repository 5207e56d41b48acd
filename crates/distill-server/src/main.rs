//! Distill HTTP Server
//!
//! Axum-based server answering the landing page's compression demo.
//!
//! Without configuration it compresses with the local word-scoring
//! heuristic. Set `COMPRESSOR_UPSTREAM` to forward to a real compression
//! service instead.

mod handlers;
mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use distill_core::{Compressor, DemoConfig, HeuristicCompressor};
use distill_runtime::RemoteCompressor;

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

    let compressor = compressor_from_env()?;
    if compressor.health_check().await {
        tracing::info!("✓ Compressor ready: {}", compressor.name());
    } else {
        tracing::warn!("⚠ {} not reachable - /compress_prompt will fail", compressor.name());
        tracing::warn!("  Check COMPRESSOR_UPSTREAM or unset it to use the local heuristic");
    }

    let state = AppState::new(compressor);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

    // Build router
    let app = Router::new()
        .merge(handlers::routes())
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(&static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8001".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 distill server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health           - Health check");
    tracing::info!("  POST /compress_prompt  - Compress a prompt");
    tracing::info!("  GET  /api/report       - Benchmark results");
    tracing::info!("  GET  /api/savings      - Monthly savings estimate");
    tracing::info!("  GET  /*                - Landing page from {}", static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Heuristic by default; `COMPRESSOR_UPSTREAM` forwards to another service
fn compressor_from_env() -> anyhow::Result<Arc<dyn Compressor>> {
    match std::env::var("COMPRESSOR_UPSTREAM") {
        Ok(upstream) if !upstream.trim().is_empty() => {
            let config = DemoConfig {
                base_url: upstream.trim_end_matches('/').to_string(),
                ..DemoConfig::from_env()
            };
            tracing::info!("Forwarding compression to {}", config.endpoint());
            Ok(Arc::new(RemoteCompressor::from_config(&config)?))
        }
        _ => Ok(Arc::new(HeuristicCompressor::new())),
    }
}
