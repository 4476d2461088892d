//! Demo HTTP server
//!
//! - `GET /` and `GET /index.html` serve a static page
//! - `GET /api` starts a run in the background and acknowledges immediately
//! - anything else is a 404
//!
//! Run output goes to the console and the log, never into the HTTP response.

use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::orchestrator::Orchestrator;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Body returned by `GET /api`
pub const RUN_ACK: &str = "Run started; output goes to the server console\n";

/// Builds the demo router
pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/api", get(start_run))
        .fallback(not_found)
        .with_state(orchestrator)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn start_run(State(orchestrator): State<Arc<Orchestrator>>) -> &'static str {
    debug!("Run requested over HTTP");
    tokio::spawn(async move {
        orchestrator.run().await;
    });
    RUN_ACK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found\n")
}

/// Serves the demo router on all interfaces until the process exits
pub async fn serve(orchestrator: Arc<Orchestrator>, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(orchestrator)).await
}
