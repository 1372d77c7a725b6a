//! GraphQL inbound adapter.
//!
//! Purpose: expose the directory through a four-field query schema and turn
//! engine responses into the `{data, errors}` envelope the HTTP layer sends.
//! The schema is built once at startup and shared by every request.

mod executor;
mod query;
mod types;

pub use executor::{ExecutionResult, GraphqlExecutor, QueryError, QueryExecutor, SourceLocation};
#[cfg(test)]
pub use executor::MockQueryExecutor;
pub use query::Query;
pub use types::{CityObject, UserObject};

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::domain::DirectoryService;

/// Read-only directory schema.
pub type DirectorySchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Build the schema with `service` attached for resolvers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use atlas::domain::DirectoryService;
/// use atlas::inbound::graphql::build_schema;
/// use atlas::outbound::memory::InMemoryDirectory;
///
/// let store = Arc::new(InMemoryDirectory::seeded().expect("seed is valid"));
/// let schema = build_schema(DirectoryService::new(store.clone(), store));
/// assert!(schema.sdl().contains("firstname"));
/// ```
#[must_use]
pub fn build_schema(service: DirectoryService) -> DirectorySchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(service)
        .finish()
}

/// Schema definition language for the directory schema.
///
/// Resolvers are never invoked, so no service is needed.
#[must_use]
pub fn schema_sdl() -> String {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}
