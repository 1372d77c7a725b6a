//! Inbound adapters translating external requests into directory queries.
//!
//! [`graphql`] owns the schema and execution envelope; [`http`] carries it
//! over Actix and adds probes and error mapping.

pub mod graphql;
pub mod http;
