pub mod core;
pub mod error_handler;
pub mod middleware_layer;
pub mod routes;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::request_id::request_id,
    routes::{health_route::health, query::query_route::query},
};

pub use crate::core::app_state::ApiConfig;

/// Routes plus request-id middleware; no socket involved.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/query", post(query))
        .route("/health", get(health))
        .fallback(|| async { AppError::NotFound })
        .layer(middleware::from_fn(request_id))
        .with_state(state)
}

/// Binds `state.config.address` and serves until Ctrl+C.
pub async fn start(state: AppState) -> AppResult<()> {
    let addr = state.config.address;
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
