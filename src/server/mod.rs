//! Static Frontend Server
//!
//! Serves the frontend bundle with tower-http's `ServeDir` defaults:
//! index.html for directories, MIME types from the extension, 404 for
//! anything missing.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::error::LaunchError;

/// Fail with `MissingDirectory` unless `path` exists.
pub fn validate_root(path: &Path) -> Result<(), LaunchError> {
    if !path.exists() {
        return Err(LaunchError::MissingDirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Router serving every path out of `root`.
pub fn build_router(root: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(root))
}

/// Bind the listening socket.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, LaunchError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| LaunchError::ListenerBind { addr, source })?;

    match listener.local_addr() {
        Ok(local) => log::info!("[Server] Listening on {}", local),
        Err(_) => log::info!("[Server] Listening on {}", addr),
    }
    Ok(listener)
}

/// Serve `root` on an already bound listener. Only returns on I/O failure.
pub async fn serve(listener: TcpListener, root: &Path) -> Result<(), LaunchError> {
    log::info!("[Server] Serving {}", root.display());
    let app = build_router(root);
    axum::serve(listener, app).await.map_err(LaunchError::Serve)
}
