use anyhow::Result;
use tracing::{debug, warn};

use catalog_api::form::{self, form_value};
use catalog_api::response::SearchResponse;
use catalog_api::status::StatusCode;

use crate::proto::http_like::{Request, Response};
use crate::services::Services;

use super::util::{error_response, json_body};

pub fn handle_status(services: &Services) -> Result<Response> {
    Ok(json_body(StatusCode::Ok, &services.status()))
}

pub fn handle_search(req: &Request, services: &Services) -> Result<Response> {
    if let Some(ct) = req.header("content-type") {
        if !ct.to_ascii_lowercase().starts_with(form::CONTENT_TYPE) {
            return Ok(error_response(
                StatusCode::BadRequest,
                "Expected form data (application/x-www-form-urlencoded)",
            ));
        }
    }
    let Some(query) = form_value(&req.body, "query") else {
        return Ok(error_response(StatusCode::BadRequest, "Missing form field: query"));
    };
    let query = query.trim();
    if query.is_empty() {
        return Ok(error_response(StatusCode::BadRequest, "Query must not be empty"));
    }

    match services.search(query) {
        Ok(results) => {
            debug!(target: "catalogd", "search {:?} -> {} results", query, results.len());
            Ok(json_body(StatusCode::Ok, &SearchResponse { results }))
        }
        Err(e) => {
            warn!(target: "catalogd", "search {:?} failed: {e}", query);
            Ok(error_response(e.status_code(), &e.to_string()))
        }
    }
}
