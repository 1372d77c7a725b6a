//! Read-only GraphQL directory of users and cities.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, ports and
//! the directory service; [`outbound`] implements the ports; [`inbound`]
//! exposes them over GraphQL and HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
