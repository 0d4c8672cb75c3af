// Embedding backend abstraction and the Ollama client implementation

pub mod ollama;

use anyhow::Result;

/// Backend that turns text into fixed-dimension embedding vectors.
///
/// The same backend must be used for indexing and for query embedding, so
/// the vectors are comparable.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
