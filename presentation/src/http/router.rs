//! Router construction and server loop

use super::handlers;
use axum::Router;
use axum::routing::post;
use capital_application::QuestionService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QuestionService>,
}

impl AppState {
    pub fn new(service: QuestionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(handlers::ask))
        .route("/capital", post(handlers::capital))
        .route("/capitalWithInfo", post(handlers::capital_with_info))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Serve `state` on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(target: "http", addr = %addr, "Listening on http://{}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(target: "http", "Shutdown signal received"),
        Err(e) => warn!(target: "http", "Failed to listen for Ctrl-C: {}", e),
    }
}
