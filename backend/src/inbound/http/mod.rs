//! HTTP inbound adapter: the `/graphql` endpoint and health probes.

pub mod error;
pub mod graphql;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
