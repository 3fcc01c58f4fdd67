//! # Gateway Server
//!
//! Binds the listener and serves the gateway and health routes.

use std::fs;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;

use crate::api::API_PREFIX;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::SqliteStore;

use super::config::GatewayConfig;
use super::observability_routes::health_routes;
use super::routes::{gateway_routes, GatewayState};

/// HTTP gateway over a data root of SQLite files
pub struct GatewayServer {
    config: GatewayConfig,
    data_root: PathBuf,
    router: Router,
}

impl GatewayServer {
    /// Prepare the data root and build the router.
    ///
    /// The data root is created if missing and made absolute.
    pub fn new(config: GatewayConfig) -> io::Result<Self> {
        let data_root = prepare_data_root(&config.data_dir)?;
        let router = Self::build_router(&config, &data_root);

        if config.secret.is_empty() {
            log_event(Event::EmptySecret);
        }

        Ok(Self {
            config,
            data_root,
            router,
        })
    }

    fn build_router(config: &GatewayConfig, data_root: &Path) -> Router {
        let state = Arc::new(
            GatewayState::new(SqliteStore::new(data_root), config.secret.clone())
                .with_body_limits(
                    Duration::from_secs(config.request_timeout_secs),
                    config.max_body_bytes,
                ),
        );

        // the body is already buffered and bounded by the gateway middleware
        Router::new()
            .merge(health_routes())
            .nest(API_PREFIX, gateway_routes(state))
            .layer(DefaultBodyLimit::disable())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Absolute data root
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Get the router (for testing)
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?.to_string();
        let data_root = self.data_root.display().to_string();
        log_event_with_fields(
            Event::GatewayStarted,
            &[("addr", local_addr.as_str()), ("data_root", data_root.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event_with_fields(Event::GatewayStopped, &[("addr", local_addr.as_str())]);
        Ok(())
    }
}

/// Create the data root if needed and return its absolute path
pub fn prepare_data_root(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    dir.canonicalize()
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
