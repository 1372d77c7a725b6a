//! Tests for server bootstrap, covering readiness signalling and wiring.

use std::ffi::OsString;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use env_lock::lock_env;
use ortho_config::OrthoConfig;
use rstest::{fixture, rstest};

use super::server::{AppSettings, ServerConfig, create_server};
use atlas::inbound::http::health::HealthState;
use atlas::outbound::memory::InMemoryDirectory;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn config() -> ServerConfig {
    let directory = InMemoryDirectory::seeded().expect("seed is valid");
    ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)), Arc::new(directory))
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, config: ServerConfig) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(health_state.is_ready(), "server creation should mark readiness");
}

#[cfg(feature = "metrics")]
#[rstest]
#[actix_rt::test]
async fn create_server_accepts_custom_metrics(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) {
    let prometheus = actix_web_prom::PrometheusMetricsBuilder::new("atlas_test")
        .endpoint("/metrics")
        .build()
        .expect("metrics should build for tests");

    let _server = create_server(health_state.clone(), config.with_metrics(prometheus))
        .expect("server should build with metrics");

    assert!(health_state.is_ready());
}

#[rstest]
#[actix_rt::test]
async fn create_server_fails_on_an_occupied_port(health_state: web::Data<HealthState>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let taken = listener.local_addr().expect("listener address");
    let directory = InMemoryDirectory::seeded().expect("seed is valid");

    let result = create_server(
        health_state.clone(),
        ServerConfig::new(taken, Arc::new(directory)),
    );

    assert!(result.is_err(), "binding a taken port should fail");
    assert!(!health_state.is_ready(), "failed start must not report ready");
}

#[rstest]
#[actix_rt::test]
async fn loaded_settings_start_a_server(health_state: web::Data<HealthState>) {
    let settings = {
        let _guard = lock_env([
            ("ATLAS_HOST", Some("127.0.0.1".to_owned())),
            ("ATLAS_PORT", Some("0".to_owned())),
        ]);
        AppSettings::load_from_iter([OsString::from("atlas")]).expect("config should load")
    };
    let bind_addr = settings.bind_addr().expect("loopback resolves");
    let directory = InMemoryDirectory::seeded().expect("seed is valid");

    let _server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::new(directory)),
    )
    .expect("server should build from loaded settings");

    assert!(health_state.is_ready());
}
