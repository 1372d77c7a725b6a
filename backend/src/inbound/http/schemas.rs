//! OpenAPI schema definitions for payloads returned over HTTP.
//!
//! Domain and engine types do not derive `ToSchema`; these mirrors carry the
//! documentation instead and are registered under the real types' names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "query parameter is required")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, e.g. `{"field": "query", "code": "missing_query"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for a query document position.
#[derive(ToSchema)]
#[schema(as = crate::inbound::graphql::SourceLocation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SourceLocationSchema {
    #[schema(example = 1)]
    line: usize,
    #[schema(example = 8)]
    column: usize,
}

/// OpenAPI schema for [`crate::inbound::graphql::QueryError`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::graphql::QueryError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QueryErrorSchema {
    /// Human-readable description.
    #[schema(example = "Unknown field \"email\" on type \"User\".")]
    message: String,
    /// Positions in the query document; omitted when unknown.
    locations: Option<Vec<SourceLocationSchema>>,
    /// Response path of the failing field; omitted for document errors.
    #[schema(value_type = Option<Vec<Object>>)]
    path: Option<Vec<serde_json::Value>>,
    /// Machine-readable extras such as `code` and `traceId`.
    #[schema(value_type = Option<Object>)]
    extensions: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::inbound::graphql::ExecutionResult`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::graphql::ExecutionResult)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExecutionResultSchema {
    /// Selected data; omitted when the document was rejected before execution.
    #[schema(value_type = Option<Object>)]
    data: Option<serde_json::Value>,
    /// Errors raised while parsing, validating or resolving; omitted when empty.
    errors: Option<Vec<QueryErrorSchema>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"), "schema: {schema_json}");
        assert!(schema_json.contains("details"), "schema: {schema_json}");
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
        assert!(!schema_json.contains("not_found"), "schema: {schema_json}");
    }

    #[test]
    fn execution_result_schema_documents_both_members() {
        assert_eq!(
            ExecutionResultSchema::name(),
            "crate.inbound.graphql.ExecutionResult"
        );
        let schema_json = schema_to_json::<ExecutionResultSchema>();
        assert!(schema_json.contains("data"));
        assert!(schema_json.contains("errors"));
    }
}
