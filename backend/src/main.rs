//! Directory server entry-point: loads settings, seeds the store and serves
//! GraphQL, health probes and (in debug builds) OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use atlas::inbound::http::health::HealthState;
use atlas::outbound::memory::InMemoryDirectory;
use server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("invalid configuration: {e}")))?;
    let bind_addr = settings.bind_addr()?;

    let directory = InMemoryDirectory::seeded().map_err(std::io::Error::other)?;
    info!(
        users = directory.users().len(),
        cities = directory.cities().len(),
        "directory loaded"
    );

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::new(directory)),
    )?;
    info!(%bind_addr, "serving GraphQL at /graphql");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}

#[cfg(test)]
mod tests;
