//! HTTP transport for the target server.
//!
//! Every path and method lands in one fallback handler; routing is decided
//! by [`TargetServer::respond`] from the path flags, not by axum routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

use super::error::ServerError;
use super::target::TargetServer;

/// Build an axum `Router` serving the given target.
pub fn router(server: Arc<TargetServer>) -> Router {
    Router::new().fallback(handle).with_state(server)
}

/// Serve the target over HTTP at the given address (e.g. `"127.0.0.1:20752"`).
pub async fn serve(server: Arc<TargetServer>, addr: &str) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    serve_on(server, listener).await
}

/// Serve on an already-bound listener.
pub async fn serve_on(server: Arc<TargetServer>, listener: TcpListener) -> Result<(), ServerError> {
    if let Ok(local) = listener.local_addr() {
        tracing::info!(addr = %local, granularity = server.granularity().seconds(), "listening");
    }
    axum::serve(listener, router(server)).await?;
    Ok(())
}

async fn handle(
    State(server): State<Arc<TargetServer>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let reply = server.respond(&method, uri.path(), &headers);
    tracing::info!(method = %method, uri = %uri, status = reply.status.as_u16(), "request");
    reply
}
