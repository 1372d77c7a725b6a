//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the HTTP endpoints (GraphQL and health) and the
//! schema mirrors from [`crate::inbound::http::schemas`]. The GraphQL schema
//! itself is exported separately as SDL by the `schema-dump` binary.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, ExecutionResultSchema, QueryErrorSchema, SourceLocationSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the HTTP surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atlas directory API",
        description = "Read-only GraphQL directory of users and cities, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::graphql::graphql,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ExecutionResultSchema,
        QueryErrorSchema,
        SourceLocationSchema
    )),
    tags(
        (name = "graphql", description = "GraphQL queries over HTTP GET"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/graphql")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_every_endpoint(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("crate.domain.Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }
}
