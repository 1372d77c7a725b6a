//! Listener settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `ATLAS_*` environment variables and an
//! optional configuration file.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Where the HTTP listener binds.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ATLAS")]
pub struct AppSettings {
    /// Interface or host name to bind.
    pub host: Option<String>,
    /// TCP port to bind; `0` picks a free port.
    #[ortho_config(default = 8000)]
    pub port: u16,
}

impl AppSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Resolve the listener address.
    ///
    /// # Errors
    /// Returns an [`io::Error`] when the host does not resolve to any address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("host {:?} resolved to no addresses", self.host()),
                )
            })
    }
}
