//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use atlas::outbound::memory::InMemoryDirectory;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Arc<InMemoryDirectory>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Serve `directory` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, directory: Arc<InMemoryDirectory>) -> Self {
        Self {
            bind_addr,
            directory,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Use a pre-built Prometheus middleware instead of the default one.
    #[cfg(feature = "metrics")]
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Overridden only by tests; main uses the default")
    )]
    #[must_use]
    pub fn with_metrics(mut self, prometheus: PrometheusMetrics) -> Self {
        self.prometheus = Some(prometheus);
        self
    }
}
