//! Main HTTP Gateway Server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::any,
    Router,
};
use geoforge_config::AppConfig;
use geoforge_core::GeoError;
use geoforge_security::OriginPolicy;
use geoforge_understanding::AnalysisPipeline;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::analyze;

/// Largest accepted multipart body.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application state shared across routes. Immutable after startup.
#[derive(Clone)]
pub struct GatewayState {
    pub pipeline: Arc<AnalysisPipeline>,
    pub origin_policy: Arc<OriginPolicy>,
}

impl GatewayState {
    pub fn new(pipeline: AnalysisPipeline, origin_policy: OriginPolicy) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            origin_policy: Arc::new(origin_policy),
        }
    }

    /// Build the pipeline and trust list from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, GeoError> {
        let policy = OriginPolicy::new(config.all_trusted_origins())
            .map_err(|e| GeoError::Config(format!("invalid trusted origin pattern: {e}")))?;
        Ok(Self::new(AnalysisPipeline::from_config(config), policy))
    }
}

/// Build the router. Only `/api/analyze` exists; every other path is 404.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/analyze", any(analyze::analyze))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Starts the Axum HTTP server for the gateway.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
