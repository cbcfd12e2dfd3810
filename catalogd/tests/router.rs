use catalog_api::form::{encode_form, CONTENT_TYPE};
use catalogd::config::ServerConfig;
use catalogd::proto::http_like::Request;
use catalogd::router::handle;
use catalogd::services::Services;
use serde_json::Value;

fn search_req(query: &str) -> Request {
    Request::new("POST", "/search").with_body(CONTENT_TYPE, encode_form(&[("query", query)]))
}

fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("valid json")
}

async fn loaded() -> Services {
    let services = Services::new(ServerConfig::default());
    services.load().await.expect("hashing embedder loads");
    services
}

#[test]
fn status_reports_flags_before_load() {
    let services = Services::new(ServerConfig::default());
    let resp = handle(Request::new("GET", "/status"), &services).expect("router should handle");
    assert_eq!(resp.code.as_u16(), 200);
    assert_eq!(resp.header("content-type"), Some("application/json"));
    let v = json(&resp.body);
    assert_eq!(v["model_loaded"], false);
    assert_eq!(v["embeddings_loaded"], false);
}

#[tokio::test]
async fn status_reports_ready_after_load() {
    let services = loaded().await;
    let resp = handle(Request::new("GET", "/status"), &services).unwrap();
    let v = json(&resp.body);
    assert_eq!(v["model_loaded"], true);
    assert_eq!(v["embeddings_loaded"], true);
}

#[test]
fn search_before_load_is_503_with_message() {
    let services = Services::new(ServerConfig::default());
    let resp = handle(search_req("laptop"), &services).unwrap();
    assert_eq!(resp.code.as_u16(), 503);
    let v = json(&resp.body);
    assert_eq!(
        v["error"],
        "Model is still loading or failed to load. Please try again later."
    );
}

#[tokio::test]
async fn search_returns_ranked_results_above_threshold() {
    let services = loaded().await;
    let resp = handle(search_req("wireless headphones"), &services).unwrap();
    assert_eq!(resp.code.as_u16(), 200);
    let v = json(&resp.body);
    let results = v["results"].as_array().expect("results array");
    assert!(!results.is_empty());
    assert_eq!(results[0]["name"], "Headphones");
    assert_eq!(results[0]["category"], "Electronics");

    let scores: Vec<f64> = results.iter().map(|r| r["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "scores sorted desc: {scores:?}");
    assert!(scores.iter().all(|s| *s >= 10.0 && *s <= 100.0));
}

#[tokio::test]
async fn search_missing_or_blank_query_is_400() {
    let services = loaded().await;

    let resp = handle(
        Request::new("POST", "/search").with_body(CONTENT_TYPE, "other=1"),
        &services,
    )
    .unwrap();
    assert_eq!(resp.code.as_u16(), 400);
    assert_eq!(json(&resp.body)["error"], "Missing form field: query");

    let resp = handle(search_req("   "), &services).unwrap();
    assert_eq!(resp.code.as_u16(), 400);
}

#[tokio::test]
async fn search_rejects_non_form_bodies() {
    let services = loaded().await;
    let req = Request::new("POST", "/search").with_body("application/json", r#"{"query":"x"}"#);
    let resp = handle(req, &services).unwrap();
    assert_eq!(resp.code.as_u16(), 400);
}

#[test]
fn wrong_method_and_unknown_path() {
    let services = Services::new(ServerConfig::default());
    let resp = handle(Request::new("GET", "/search"), &services).unwrap();
    assert_eq!(resp.code.as_u16(), 405);
    let resp = handle(Request::new("GET", "/nope"), &services).unwrap();
    assert_eq!(resp.code.as_u16(), 404);
    assert_eq!(json(&resp.body)["error"], "Not found");
}

#[tokio::test]
async fn unknown_embedder_never_becomes_ready() {
    let cfg = ServerConfig { embedder: "missing".into(), ..ServerConfig::default() };
    let services = Services::new(cfg);
    assert!(services.load().await.is_err());
    assert!(!services.status().is_ready());
}

#[test]
fn preflight_is_answered_for_any_path() {
    let services = Services::new(ServerConfig::default());
    let resp = handle(Request::new("OPTIONS", "/search"), &services).unwrap();
    assert_eq!(resp.code.as_u16(), 200);
    assert_eq!(resp.header("access-control-allow-methods"), Some("GET, POST, OPTIONS"));
    assert!(resp.body.is_empty());
}
