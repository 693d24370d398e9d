use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::api::{self, SharedState};
use super::service::DiagnosticService;

/// Port used when neither a flag nor `PORT` supplies one.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration for the repair bay server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolve the listening port: explicit flag, then the `PORT` value, then
    /// [`DEFAULT_PORT`]. Unparseable or zero `PORT` values are ignored.
    pub fn resolve(host: Option<IpAddr>, port_flag: Option<u16>, port_env: Option<&str>) -> Self {
        let port = port_flag
            .or_else(|| {
                port_env
                    .and_then(|raw| raw.trim().parse::<u16>().ok())
                    .filter(|port| *port != 0)
            })
            .unwrap_or(DEFAULT_PORT);

        Self {
            host: host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port,
        }
    }

    /// Build from the process environment.
    pub fn from_env(host: Option<IpAddr>, port_flag: Option<u16>) -> Self {
        let port_env = std::env::var("PORT").ok();
        Self::resolve(host, port_flag, port_env.as_deref())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Build the full application router with request tracing.
pub fn build_router(state: SharedState) -> Router {
    api::api_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: SharedState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .context("Server error")
}

/// Start the repair bay server and block until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let local_addr = listener.local_addr()?;
    info!("Server running on http://{}", local_addr);

    let state = Arc::new(DiagnosticService::default());
    serve(listener, state, shutdown_signal()).await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
