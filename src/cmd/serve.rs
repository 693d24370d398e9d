//! Repair bay server command, the default `repair-bay` invocation.

use std::net::IpAddr;

use anyhow::Result;
use repair_bay::bay::server::{ServerConfig, start_server};

pub async fn cmd_serve(host: Option<IpAddr>, port: Option<u16>) -> Result<()> {
    let config = ServerConfig::from_env(host, port);
    tracing::debug!(?config, "Resolved server configuration");

    start_server(config).await
}
