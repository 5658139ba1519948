//! Server configuration
//!
//! Each setting resolves from its command-line flag, then its environment
//! variable, then the default.

use clap::Parser;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::warn;

/// Port used when neither `--port` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;

/// Data file used when neither `--data-file` nor `ZOOKEEPR_DATA` is set.
pub const DEFAULT_DATA_FILE: &str = "data/animals.json";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "zookeepr", version, about = "Animal record API server")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON document holding the animal collection
    #[arg(long, env = "ZOOKEEPR_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,
}

impl ServerConfig {
    /// Address to bind: every interface (IPv6 and IPv4) on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, self.port))
    }

    /// IPv4-only address, for hosts where IPv6 is unavailable.
    pub fn fallback_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Bind the listening socket, dropping to IPv4 if IPv6 cannot be bound.
    pub async fn bind(&self) -> io::Result<TcpListener> {
        bind_with_fallback(self.socket_addr(), self.fallback_addr()).await
    }
}

/// Bind `primary`, or `fallback` if that fails.
///
/// Returns the fallback's error when both fail.
pub async fn bind_with_fallback(
    primary: SocketAddr,
    fallback: SocketAddr,
) -> io::Result<TcpListener> {
    match TcpListener::bind(primary).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            warn!("Cannot bind {} ({}), falling back to {}", primary, e, fallback);
            TcpListener::bind(fallback).await
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}
