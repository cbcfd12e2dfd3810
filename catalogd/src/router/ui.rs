use std::path::{Path, PathBuf};

use anyhow::Result;
use catalog_api::status::StatusCode;
use tracing::debug;

use crate::config::ServerConfig;
use crate::proto::http_like::Response;

use super::util::{error_response, html_response};

fn crate_ui_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("ui")
}

/// Directory holding `index.html` and `static/`. Tries `CATALOG_UI_DIR`,
/// the crate's `ui/`, `./ui`, then `ui/` beside the executable.
pub fn ui_dir(cfg: &ServerConfig) -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|d| d.join("ui")));
    let in_cwd = std::env::current_dir().ok().map(|cwd| cwd.join("ui"));

    let found = cfg
        .ui_dir
        .clone()
        .into_iter()
        .chain(Some(crate_ui_dir()))
        .chain(in_cwd)
        .chain(beside_exe)
        .find(|dir| dir.is_dir());
    match found {
        Some(dir) => {
            debug!(target: "catalogd::ui", "serving ui from {}", dir.display());
            dir
        }
        None => crate_ui_dir(),
    }
}

pub fn serve_index_html(cfg: &ServerConfig) -> Result<Response> {
    let index = ui_dir(cfg).join("index.html");
    let body = std::fs::read(&index).unwrap_or_else(|e| {
        debug!(target: "catalogd::ui", "{}: {e}; using built-in page", index.display());
        DEFAULT_INDEX_HTML.as_bytes().to_vec()
    });
    Ok(html_response(StatusCode::Ok, body))
}

pub fn serve_asset(cfg: &ServerConfig, path: &str) -> Result<Response> {
    let rel = path.strip_prefix("/static/").unwrap_or("");
    if rel.is_empty() || rel.contains("..") || rel.starts_with('/') || rel.contains('\\') {
        return Ok(error_response(StatusCode::BadRequest, "Invalid asset path"));
    }
    let p = ui_dir(cfg).join("static").join(rel);
    match std::fs::read(&p) {
        Ok(bytes) => Ok(Response {
            code: StatusCode::Ok,
            headers: vec![("content-type".into(), content_type_for(&p).into())],
            body: bytes,
        }),
        Err(e) => {
            debug!(target: "catalogd::ui", "no asset at {}: {e}", p.display());
            Ok(error_response(StatusCode::NotFound, "Asset not found"))
        }
    }
}

fn content_type_for(p: &Path) -> &'static str {
    let ext = p.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

// Fallback host page if the ui directory is missing.
static DEFAULT_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Product Search</title>
</head>
<body>
  <div class="container py-4">
    <h1>Product Search</h1>
    <form id="search-form" class="disabled">
      <input id="search-query" name="query" type="text" placeholder="Describe what you are looking for..." autocomplete="off" disabled />
      <button type="submit">Search</button>
    </form>
    <div id="loading" class="d-none">Searching...</div>
    <div id="search-results"></div>
    <p id="client-note">This page ships no script. The search form is driven by the <code>catalog</code> terminal client (<code>CATALOG_URL=http://host:port catalog</code>); the JSON API is <code>GET /status</code> and <code>POST /search</code>.</p>
  </div>
</body>
</html>
"#;
