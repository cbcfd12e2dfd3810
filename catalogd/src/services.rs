use std::cmp::Ordering;
use std::time::Duration;

use catalog_api::response::{ReadinessStatus, SearchResult};
use catalog_api::status::StatusCode;
use catalog_embed::{cosine_similarity, make_embedder, register_defaults, Embedder};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::catalog::{Product, PRODUCTS};
use crate::config::ServerConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Model is still loading or failed to load. Please try again later.")]
    ModelNotLoaded,

    #[error("Product embeddings are still being computed. Please try again later.")]
    EmbeddingsNotReady,

    #[error("failed to load model: {0}")]
    ModelLoad(String),

    #[error("An error occurred during search: {0}")]
    Internal(String),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::ModelNotLoaded | SearchError::EmbeddingsNotReady => {
                StatusCode::ServiceUnavailable
            }
            SearchError::ModelLoad(_) | SearchError::Internal(_) => {
                StatusCode::InternalServerError
            }
        }
    }
}

/// Shared server state: the embedding model and the product embeddings,
/// each loaded once. Until both are present, search answers 503.
pub struct Services {
    cfg: ServerConfig,
    model: OnceCell<Box<dyn Embedder>>,
    embeddings: OnceCell<Vec<Vec<f32>>>,
}

impl Services {
    pub fn new(cfg: ServerConfig) -> Self {
        register_defaults();
        Self {
            cfg,
            model: OnceCell::new(),
            embeddings: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.cfg
    }

    /// Non-blocking readiness snapshot.
    pub fn status(&self) -> ReadinessStatus {
        ReadinessStatus {
            model_loaded: self.model.initialized(),
            embeddings_loaded: self.embeddings.initialized(),
        }
    }

    /// Load the model, then embed the catalog. Idempotent; a failed attempt
    /// leaves the slot empty so a later call retries.
    pub async fn load(&self) -> Result<(), SearchError> {
        let model = self
            .model
            .get_or_try_init(|| async {
                if self.cfg.warmup_ms > 0 {
                    info!(target: "catalogd", "loading model ({} ms warmup)", self.cfg.warmup_ms);
                    tokio::time::sleep(Duration::from_millis(self.cfg.warmup_ms)).await;
                }
                // Model-backed embedders read (or download) weights here.
                let name = self.cfg.embedder.clone();
                let model = tokio::task::spawn_blocking(move || make_embedder(&name))
                    .await
                    .map_err(|e| SearchError::ModelLoad(e.to_string()))?
                    .map_err(|e| SearchError::ModelLoad(e.to_string()))?;
                info!(
                    target: "catalogd",
                    "model {} loaded (dimension {})",
                    model.name(),
                    model.dimension()
                );
                Ok::<_, SearchError>(model)
            })
            .await?;

        self.embeddings
            .get_or_try_init(|| async {
                let texts: Vec<String> = PRODUCTS.iter().map(Product::text).collect();
                let vectors = model
                    .embed_batch(&texts)
                    .map_err(|e| SearchError::Internal(e.to_string()))?;
                info!(target: "catalogd", "embedded {} products", vectors.len());
                Ok::<_, SearchError>(vectors)
            })
            .await?;
        Ok(())
    }

    /// Rank the catalog against `query`, best first. Products at or below
    /// `min_score` are dropped; scores are percentages rounded to 2 decimals.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let model = self.model.get().ok_or(SearchError::ModelNotLoaded)?;
        let embeddings = self.embeddings.get().ok_or(SearchError::EmbeddingsNotReady)?;

        let q = model
            .embed(query)
            .map_err(|e| SearchError::Internal(e.to_string()))?;

        let mut scored: Vec<(usize, f32)> = embeddings
            .iter()
            .enumerate()
            .map(|(i, e)| (i, cosine_similarity(&q, e)))
            .filter(|(_, s)| *s > self.cfg.min_score)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        debug!(target: "catalogd", "query {:?} matched {} products", query, scored.len());
        Ok(scored
            .into_iter()
            .map(|(i, s)| PRODUCTS[i].to_result(to_percent(s)))
            .collect())
    }
}

fn to_percent(cosine: f32) -> f64 {
    (cosine as f64 * 100.0 * 100.0).round() / 100.0
}
