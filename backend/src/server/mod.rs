//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;

pub use config::ServerConfig;
pub use settings::AppSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use atlas::Trace;
#[cfg(debug_assertions)]
use atlas::doc::ApiDoc;
use atlas::domain::DirectoryService;
use atlas::inbound::graphql::{GraphqlExecutor, build_schema};
use atlas::inbound::http::error::query_error_handler;
use atlas::inbound::http::graphql::graphql;
use atlas::inbound::http::health::{HealthState, live, ready};
use atlas::inbound::http::state::HttpState;

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = DirectoryService::new(config.directory.clone(), config.directory.clone());
    let executor = GraphqlExecutor::new(build_schema(service));
    web::Data::new(HttpState::new(Arc::new(executor)))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(Trace)
        .service(graphql)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the configured directory.
///
/// The schema is built before the socket is bound and readiness is flagged
/// only once the server exists, so no request can observe a half-built
/// directory.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or registering
/// metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    #[cfg(feature = "metrics")]
    let prometheus = match config.prometheus {
        Some(prometheus) => prometheus,
        None => metrics::make_metrics()?,
    };

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
