//! PromptPay QR Server
//!
//! A small service that turns validated generate requests into
//! bill-payment QR payloads.
//!
//! Usage:
//!   cargo run --package qr-server
//!
//!   # Bind elsewhere
//!   BIND_ADDR=0.0.0.0 SERVER_PORT=9000 cargo run --package qr-server

mod config;
mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use config::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qr_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Build router
    let app = Router::new()
        .route("/v1/generate", post(handlers::generate))
        .route("/v1/health", get(handlers::health))
        .route("/", get(handlers::root))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    tracing::info!("QR server listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
