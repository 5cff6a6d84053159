use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::proxy::{self, ProxyError, ProxyState};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error(transparent)]
    Proxy(#[from] ProxyError),
}

/// Routes: health check, `/api/*` forwarding, and the frontend bundle with
/// `index.html` answering for client-side routes.
pub fn router(state: Arc<ProxyState>, dist_dir: &Path) -> Router {
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/*path", any(proxy::forward))
        .with_state(state)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": crate::NAME,
        "version": crate::VERSION,
    }))
}

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(ProxyState::from_config(&config)?);

    if !config.dist_dir.join("index.html").is_file() {
        log::warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            config.dist_dir.display()
        );
    }

    let app = router(state.clone(), &config.dist_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    log::info!(
        "Serving {} on http://{} (API -> {})",
        config.dist_dir.display(),
        config.bind_addr,
        state.backend_url()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
