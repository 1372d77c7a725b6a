//! HTTP mapping for domain errors.
//!
//! Handlers return [`ApiResult`]; failures become a JSON [`Error`] body with
//! a status derived from the error code and the `trace-id` header echoed.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::QueryPayloadError, http::StatusCode};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self.redacted())
    }
}

/// Rejection for query strings that cannot be decoded at all.
///
/// Registered through [`actix_web::web::QueryConfig`] so malformed input
/// gets the same JSON payload as every other client error.
#[allow(
    clippy::needless_pass_by_value,
    reason = "signature fixed by QueryConfig::error_handler"
)]
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected query string");
    Error::invalid_request("query string could not be decoded")
        .with_details(json!({ "code": "malformed_query_string" }))
        .into()
}
