#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog_api::response::{ReadinessStatus, ResultId, SearchResult};
use catalog_client::{Backend, ClientError};
use tokio::sync::Notify;
use tokio::time::Instant;

pub fn ready() -> Result<ReadinessStatus, ClientError> {
    Ok(ReadinessStatus { model_loaded: true, embeddings_loaded: true })
}

pub fn not_ready() -> Result<ReadinessStatus, ClientError> {
    Ok(ReadinessStatus { model_loaded: true, embeddings_loaded: false })
}

pub fn unreachable() -> Result<ReadinessStatus, ClientError> {
    Err(ClientError::Transport("connection refused".into()))
}

pub fn item(id: i64, name: &str, category: Option<&str>, score: f64) -> SearchResult {
    SearchResult {
        id: Some(ResultId::Number(id)),
        name: name.to_string(),
        description: format!("{name} description"),
        category: category.map(str::to_string),
        score,
    }
}

/// Replays readiness answers in order (not-ready once exhausted) and a fixed
/// search reply; records every call.
#[derive(Default)]
pub struct ScriptedBackend {
    statuses: Mutex<VecDeque<Result<ReadinessStatus, ClientError>>>,
    status_calls: Mutex<Vec<Instant>>,
    search_reply: Mutex<Option<Result<Vec<SearchResult>, ClientError>>>,
    search_calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn with_statuses(
        statuses: impl IntoIterator<Item = Result<ReadinessStatus, ClientError>>,
    ) -> Arc<Self> {
        Arc::new(Self { statuses: Mutex::new(statuses.into_iter().collect()), ..Self::default() })
    }

    pub fn with_search(reply: Result<Vec<SearchResult>, ClientError>) -> Arc<Self> {
        Arc::new(Self { search_reply: Mutex::new(Some(reply)), ..Self::default() })
    }

    pub fn status_calls(&self) -> Vec<Instant> {
        self.status_calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn status(&self) -> Result<ReadinessStatus, ClientError> {
        self.status_calls.lock().unwrap().push(Instant::now());
        self.statuses.lock().unwrap().pop_front().unwrap_or_else(not_ready)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        self.search_calls.lock().unwrap().push(query.to_string());
        self.search_reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Search backend where the query "slow" blocks until `release` is called.
/// Every query answers one result named after the query.
#[derive(Default)]
pub struct GatedBackend {
    gate: Notify,
    calls: Mutex<Vec<String>>,
}

impl GatedBackend {
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Backend for GatedBackend {
    async fn status(&self) -> Result<ReadinessStatus, ClientError> {
        ready()
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        self.calls.lock().unwrap().push(query.to_string());
        if query == "slow" {
            self.gate.notified().await;
        }
        Ok(vec![item(1, query, Some("Gated"), 75.0)])
    }
}
