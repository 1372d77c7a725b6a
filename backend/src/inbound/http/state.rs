//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the [`QueryExecutor`] seam and can be tested without the real schema.

use std::sync::Arc;

use crate::inbound::graphql::QueryExecutor;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Runs `/graphql` query documents.
    pub executor: Arc<dyn QueryExecutor>,
}

impl HttpState {
    /// Bundle the executor used by `/graphql`.
    #[must_use]
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }
}
