//! Listener lifecycle for the phonebook API.
//!
//! Binding and serving are split so callers (and tests) can bind port `0`,
//! read back the chosen address, and decide when the server stops.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use phonebook_core::config::ServerSettings;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Errors raised while binding or serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listener could not be opened on `host:port`.
    #[error("cannot listen on {host}:{port}: {source}")]
    Bind {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Accepting or serving connections failed.
    #[error("serve failed: {0}")]
    Serve(#[source] io::Error),
}

/// Open a TCP listener for the configured host and port.
///
/// The host may be an IP literal or a resolvable name.
///
/// # Errors
///
/// [`ServerError::Bind`] if resolution or binding fails.
pub async fn bind(settings: &ServerSettings) -> Result<TcpListener, ServerError> {
    TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .map_err(|source| ServerError::Bind {
            host: settings.host.clone(),
            port: settings.port,
            source,
        })
}

/// Serve the router on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// [`ServerError::Serve`] on a fatal I/O error.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let addr: Option<SocketAddr> = listener.local_addr().ok();
    info!(?addr, "Phonebook API listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    info!("Phonebook API stopped");
    Ok(())
}

/// Resolves on `Ctrl-C`. If the signal handler cannot be installed the
/// future never resolves and the process runs until killed.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use phonebook_core::Directory;
    use phonebook_db::{MemoryStore, StoreBackend};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    use super::*;

    fn state() -> Arc<AppState> {
        let directory = Directory::new(StoreBackend::from(MemoryStore::new()));
        Arc::new(AppState::new(directory))
    }

    fn local(port: u16) -> ServerSettings {
        ServerSettings {
            host: "127.0.0.1".to_owned(),
            port,
        }
    }

    #[tokio::test]
    async fn bind_reports_host_and_port_on_failure() {
        let taken = bind(&local(0)).await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = bind(&local(port)).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { port: p, .. } if p == port));
        assert!(err.to_string().contains(&format!("127.0.0.1:{port}")));
    }

    #[tokio::test]
    async fn serves_requests_until_shutdown() {
        let listener = bind(&local(0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve(listener, state(), async move {
            let _ = stop_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /api/people/count HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains(r#"{"personCount":0}"#));

        stop_tx.send(()).unwrap();
        assert!(handle.await.unwrap().is_ok());
    }
}
