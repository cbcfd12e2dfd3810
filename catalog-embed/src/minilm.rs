//! Sentence embeddings from all-MiniLM-L6-v2 via fastembed (ONNX runtime).

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use crate::{EmbedError, EmbedResult, Embedder};

const DIMENSION: usize = 384;

pub struct MiniLmEmbedder {
    // fastembed needs `&mut` to run the session.
    model: Mutex<TextEmbedding>,
}

impl MiniLmEmbedder {
    /// Load the model, downloading it into `CATALOG_MODEL_CACHE` (default
    /// `.fastembed_cache`) on first use. Blocking.
    pub fn load() -> EmbedResult<Self> {
        let mut options = InitOptions::default();
        options.model_name = EmbeddingModel::AllMiniLML6V2;
        if let Ok(dir) = std::env::var("CATALOG_MODEL_CACHE") {
            if !dir.trim().is_empty() {
                options.cache_dir = PathBuf::from(dir.trim());
            }
        }
        options.show_download_progress = false;
        info!(target: "catalog_embed", "loading all-MiniLM-L6-v2 from {}", options.cache_dir.display());
        let model = TextEmbedding::try_new(options).map_err(|e| EmbedError::ModelLoad(e.to_string()))?;
        Ok(Self { model: Mutex::new(model) })
    }

    fn run(&self, texts: Vec<String>) -> EmbedResult<Vec<Vec<f32>>> {
        let mut model = self.model.lock().unwrap_or_else(PoisonError::into_inner);
        model.embed(texts, None).map_err(|e| EmbedError::Inference(e.to_string()))
    }
}

impl Embedder for MiniLmEmbedder {
    fn name(&self) -> &'static str {
        "minilm"
    }

    fn dimension(&self) -> usize {
        DIMENSION
    }

    fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        self.run(vec![text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| EmbedError::Inference("empty embedding result".into()))
    }

    fn embed_batch(&self, texts: &[String]) -> EmbedResult<Vec<Vec<f32>>> {
        self.run(texts.to_vec())
    }
}
