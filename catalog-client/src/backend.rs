use async_trait::async_trait;
use catalog_api::form::{self, encode_form};
use catalog_api::response::{ReadinessStatus, SearchResponse, SearchResult};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, SEARCH_FAILED};

/// The two backend calls the page makes.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /status`.
    async fn status(&self) -> Result<ReadinessStatus, ClientError>;

    /// `POST /search` with the form field `query`.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError>;
}

pub struct HttpBackend {
    base: Url,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!("{base_url} cannot be a base url")));
        }
        // Url::join replaces the last segment unless the path ends with '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base, client: reqwest::Client::new() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, name: &str) -> Result<Url, ClientError> {
        self.base.join(name).map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn status(&self) -> Result<ReadinessStatus, ClientError> {
        let url = self.endpoint("status")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        // Any JSON object counts as an answer, whatever the status code; a
        // missing flag reads as false. Only a non-JSON body is a failure.
        serde_json::from_slice(&body).map_err(|e| {
            if status.is_success() {
                ClientError::Decode(e.to_string())
            } else {
                ClientError::Http {
                    status: status.as_u16(),
                    message: format!("status check returned {status}"),
                }
            }
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let url = self.endpoint("search")?;
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, form::CONTENT_TYPE)
            .body(encode_form(&[("query", query)]))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        debug!(target: "catalog_client", "search {:?} -> {} ({} bytes)", query, status, body.len());

        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        let parsed: SearchResponse =
            serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(parsed.results)
    }
}

/// The `error` field of a JSON error body, or the generic fallback when the
/// body is not JSON or the field is missing, empty or not a string.
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| SEARCH_FAILED.to_string())
}
