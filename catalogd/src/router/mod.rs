use anyhow::Result;

use catalog_api::status::StatusCode;

use crate::proto::http_like::{Request, Response};
use crate::services::Services;

mod api;
mod ui;
pub mod util;

pub use ui::ui_dir;

pub fn handle(req: Request, services: &Services) -> Result<Response> {
    match (req.method.as_str(), req.route()) {
        ("GET", "/") => ui::serve_index_html(services.config()),
        ("GET", path) if path.starts_with("/static/") => ui::serve_asset(services.config(), path),
        ("GET", "/status") => api::handle_status(services),
        ("POST", "/search") => api::handle_search(&req, services),
        ("OPTIONS", _) => Ok(util::preflight_response()),
        (_, "/" | "/status" | "/search") => Ok(util::error_response(
            StatusCode::MethodNotAllowed,
            "Method not allowed",
        )),
        _ => Ok(util::error_response(StatusCode::NotFound, "Not found")),
    }
}
