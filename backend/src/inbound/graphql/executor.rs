//! Query execution seam between the HTTP handler and the GraphQL engine.

use async_graphql::{PathSegment, Response, ServerError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use super::DirectorySchema;

/// Executes a query document and reports the outcome.
///
/// Execution never fails as a whole: parse, validation and resolver
/// failures are all reported inside [`ExecutionResult::errors`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run `query` against the directory schema.
    async fn execute(&self, query: &str) -> ExecutionResult;
}

/// [`QueryExecutor`] backed by the async-graphql engine.
#[derive(Clone)]
pub struct GraphqlExecutor {
    schema: DirectorySchema,
}

impl GraphqlExecutor {
    /// Wrap a built schema.
    #[must_use]
    pub fn new(schema: DirectorySchema) -> Self {
        Self { schema }
    }
}

#[async_trait]
impl QueryExecutor for GraphqlExecutor {
    async fn execute(&self, query: &str) -> ExecutionResult {
        let result = ExecutionResult::from(self.schema.execute(query).await);
        debug!(
            has_data = result.data.is_some(),
            errors = result.errors.len(),
            "query executed"
        );
        result
    }
}

/// `{data, errors}` envelope returned to clients.
///
/// Either member is omitted when it carries nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Selected data; absent when execution never started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Every error raised while parsing, validating or resolving.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<QueryError>,
}

impl ExecutionResult {
    /// Whether any error was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl From<Response> for ExecutionResult {
    fn from(response: Response) -> Self {
        let mut errors: Vec<QueryError> = response.errors.iter().map(QueryError::from).collect();
        let data = match response.data.into_json() {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(err) => {
                error!(error = %err, "query result could not be encoded");
                errors.push(QueryError::message_only("Internal server error"));
                None
            }
        };
        Self { data, errors }
    }
}

/// One error entry in an [`ExecutionResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryError {
    /// Human-readable description.
    pub message: String,
    /// Positions in the query document the error refers to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,
    /// Response path of the failing field; field names and list indices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
    /// Machine-readable extras such as `code` and `traceId`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl QueryError {
    fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }
}

impl From<&ServerError> for QueryError {
    fn from(err: &ServerError) -> Self {
        let locations = err
            .locations
            .iter()
            .map(|pos| SourceLocation {
                line: pos.line,
                column: pos.column,
            })
            .collect();
        let path = err
            .path
            .iter()
            .map(|segment| match segment {
                PathSegment::Field(name) => Value::String(name.clone()),
                PathSegment::Index(index) => Value::from(*index),
            })
            .collect();
        let extensions = err
            .extensions
            .as_ref()
            .and_then(|ext| serde_json::to_value(ext).ok());
        Self {
            message: err.message.clone(),
            locations,
            path,
            extensions,
        }
    }
}

/// 1-based line and column in the query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}
