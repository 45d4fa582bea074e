pub mod error;
pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::service::ReceiptService;

pub use error::{ApiError, ApiResult, ErrorResponse};

/// Create the API router
pub fn create_router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health))
        .route("/v1/receipts/process", post(handlers::process_receipt))
        .route("/v1/receipts/{id}/points", get(handlers::get_points))
        .with_state(service)
}

/// Bind and serve until Ctrl-C.
pub async fn run_server(config: &ServerConfig, service: Arc<ReceiptService>) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Receipts server listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
