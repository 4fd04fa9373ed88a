use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::container::Container;
use super::controller::chat;

/// The proxy's HTTP surface: `POST /chat`, callable cross-origin.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .with_state(container)
}

/// Serves the proxy on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    container: Arc<Container>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("NilAI server running at http://{}", addr);

    axum::serve(listener, build_router(container))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("NilAI server stopped");
    Ok(())
}
