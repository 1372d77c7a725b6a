//! GraphQL over HTTP GET.
//!
//! ```text
//! GET /graphql?query={user(id:"1"){id,firstname,lastname,address}}
//! ```
//!
//! The query text is handed to the executor untouched. Engine-level failures
//! (syntax, validation, resolver errors) come back as `200 OK` with an
//! `errors` array; only a request with no query at all is rejected here.

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ExecutionResultSchema};
use crate::inbound::http::state::HttpState;

/// Query-string parameters for `GET /graphql`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GraphqlParams {
    /// GraphQL query document.
    #[param(example = "{users{id,firstname}}")]
    pub query: Option<String>,
}

fn require_query(query: Option<String>) -> Result<String, Error> {
    match query {
        None => Err(Error::invalid_request("query parameter is required")
            .with_details(json!({ "field": "query", "code": "missing_query" }))),
        Some(text) if text.trim().is_empty() => {
            Err(Error::invalid_request("query parameter must not be blank")
                .with_details(json!({ "field": "query", "code": "blank_query" })))
        }
        Some(text) => Ok(text),
    }
}

/// Execute a read-only directory query.
#[utoipa::path(
    get,
    path = "/graphql",
    params(GraphqlParams),
    responses(
        (status = 200, description = "Query executed; engine errors are reported in `errors`", body = ExecutionResultSchema),
        (status = 400, description = "Missing or undecodable query parameter", body = ErrorSchema)
    ),
    tags = ["graphql"],
    operation_id = "executeQuery"
)]
#[get("/graphql")]
pub async fn graphql(
    state: web::Data<HttpState>,
    params: web::Query<GraphqlParams>,
) -> ApiResult<HttpResponse> {
    let query = require_query(params.into_inner().query)?;
    debug!(query_len = query.len(), "executing query");
    let result = state.executor.execute(&query).await;
    Ok(HttpResponse::Ok().json(result))
}
