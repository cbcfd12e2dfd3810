use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use thiserror::Error;

mod hashing;
#[cfg(feature = "minilm")]
mod minilm;
mod text;

pub use hashing::HashingEmbedder;
#[cfg(feature = "minilm")]
pub use minilm::MiniLmEmbedder;
pub use text::{is_stopword, tokenize};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    #[error("unknown embedder: {0}")]
    UnknownEmbedder(String),
    #[error("invalid embedding dimension: {0}")]
    InvalidDimension(usize),
    #[error("failed to load embedding model: {0}")]
    ModelLoad(String),
    #[error("embedding failed: {0}")]
    Inference(String),
}

pub type EmbedResult<T> = Result<T, EmbedError>;

/// Maps text to a fixed-size vector. Implementations must be thread-safe
/// and deterministic for a given input.
pub trait Embedder: Send + Sync {
    fn name(&self) -> &'static str;

    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> EmbedResult<Vec<f32>>;

    fn embed_batch(&self, texts: &[String]) -> EmbedResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
}

type EmbedderFactory = fn() -> EmbedResult<Box<dyn Embedder>>;

static REGISTRY: OnceLock<Mutex<HashMap<&'static str, EmbedderFactory>>> = OnceLock::new();

/// Poisoning is ignored: entries are plain fn pointers.
fn registry() -> MutexGuard<'static, HashMap<&'static str, EmbedderFactory>> {
    REGISTRY
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Register an embedder factory under a name. Re-registering replaces it.
pub fn register_embedder(name: &'static str, factory: EmbedderFactory) {
    registry().insert(name, factory);
}

/// Register the embedders shipped with this crate.
pub fn register_defaults() {
    register_embedder("hashing", hashing_factory);
    #[cfg(feature = "minilm")]
    register_embedder("minilm", minilm_factory);
}

fn hashing_factory() -> EmbedResult<Box<dyn Embedder>> {
    Ok(Box::new(HashingEmbedder::default()))
}

#[cfg(feature = "minilm")]
fn minilm_factory() -> EmbedResult<Box<dyn Embedder>> {
    Ok(Box::new(MiniLmEmbedder::load()?))
}

/// Create an embedder by name if registered. Model-backed embedders load
/// (and may download) their weights here, so this can block.
pub fn make_embedder(name: &str) -> EmbedResult<Box<dyn Embedder>> {
    let factory = registry().get(name).copied();
    match factory {
        Some(factory) => {
            tracing::debug!(target: "catalog_embed", "constructing embedder {name}");
            factory()
        }
        None => Err(EmbedError::UnknownEmbedder(name.to_string())),
    }
}

/// List registered embedders, sorted.
pub fn list_embedders() -> Vec<String> {
    let mut names: Vec<String> = registry().keys().map(|k| (*k).to_string()).collect();
    names.sort();
    names
}

/// Cosine similarity; 0.0 for zero vectors or mismatched lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut na = 0.0f32;
    let mut nb = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na.sqrt() * nb.sqrt())
}
