use catalog_api::response::ErrorBody;
use catalog_api::status::StatusCode;
use serde_json::to_vec;

use crate::proto::http_like::Response;

pub fn json_response(code: StatusCode, body: Vec<u8>) -> Response {
    Response { code, headers: vec![("content-type".into(), "application/json".into())], body }
}

pub fn json_body<T: serde::Serialize>(code: StatusCode, value: &T) -> Response {
    let body = to_vec(value).unwrap_or_else(|_| b"{}".to_vec());
    json_response(code, body)
}

/// JSON `{"error": ...}` with the given status.
pub fn error_response(code: StatusCode, message: &str) -> Response {
    json_body(code, &ErrorBody::new(message))
}

pub fn html_response(code: StatusCode, body: Vec<u8>) -> Response {
    Response {
        code,
        headers: vec![("content-type".into(), "text/html; charset=utf-8".into())],
        body,
    }
}

/// CORS preflight answer. Every response already allows any origin.
pub fn preflight_response() -> Response {
    Response {
        code: StatusCode::Ok,
        headers: vec![
            ("access-control-allow-methods".into(), "GET, POST, OPTIONS".into()),
            ("access-control-allow-headers".into(), "*".into()),
            ("content-type".into(), "text/plain".into()),
        ],
        body: Vec::new(),
    }
}
