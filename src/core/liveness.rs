//! Liveness endpoint for the hosting platform
//!
//! A single route, `GET /`, answering with a fixed plain-text body. It runs on
//! its own task, so it keeps answering while a chat request is in flight.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Body returned by `GET /`
pub const LIVENESS_BODY: &str = "Bot is running";

/// Router with the liveness route only. Every other path is a 404.
pub fn liveness_router() -> Router {
    Router::new().route("/", get(root_handler))
}

/// Serve the liveness router on an already bound listener.
pub async fn serve_liveness(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(listener, liveness_router()).await
}

/// Start the liveness HTTP server on `0.0.0.0:port`
///
/// Runs until the process exits; callers spawn it on a separate task.
pub async fn start_liveness_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;

    log::info!("Starting liveness server on http://{}", addr);

    serve_liveness(listener).await
}

/// GET / — fixed confirmation string
async fn root_handler() -> impl IntoResponse {
    (StatusCode::OK, LIVENESS_BODY)
}
