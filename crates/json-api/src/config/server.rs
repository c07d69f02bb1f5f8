//! Listener Config

use clap::Args;

/// Where the receipts API listens.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind, all interfaces by default
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port for the receipts API
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8080)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` string accepted by the TCP listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
