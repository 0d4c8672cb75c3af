
use tracing::{debug, info};

use crate::corpus::{Document, QaRecord};
use crate::embeddings::Embedder;
use crate::{CatechistError, Result};

/// In-memory similarity index over the corpus. Built exactly once at
/// startup and never mutated afterward; concurrent reads need no locking.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    documents: Vec<Document>,
    vectors: Vec<Vec<f32>>,
    dimension: usize,
}

impl VectorIndex {
    /// Embed every corpus record and build the index. Any backend failure,
    /// a count mismatch, or inconsistent dimensions aborts the build; no
    /// partial index is ever returned.
    #[inline]
    pub fn build(records: &[QaRecord], embedder: &dyn Embedder) -> Result<Self> {
        if records.is_empty() {
            return Err(CatechistError::IndexBuild(
                "cannot build an index over an empty corpus".to_string(),
            ));
        }

        let documents: Vec<Document> = records.iter().map(QaRecord::to_document).collect();
        let contents: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();

        let vectors = embedder.embed_batch(&contents).map_err(|e| {
            CatechistError::IndexBuild(format!("embedding backend failed: {e}"))
        })?;

        if vectors.len() != documents.len() {
            return Err(CatechistError::IndexBuild(format!(
                "embedding backend returned {} vectors for {} documents",
                vectors.len(),
                documents.len()
            )));
        }

        let dimension = vectors.first().map_or(0, Vec::len);
        if dimension == 0 {
            return Err(CatechistError::IndexBuild(
                "embedding backend returned a zero-dimension vector".to_string(),
            ));
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(CatechistError::IndexBuild(format!(
                "inconsistent embedding dimensions: expected {dimension}, got {}",
                bad.len()
            )));
        }

        info!(
            "Built vector index over {} documents ({} dimensions)",
            documents.len(),
            dimension
        );

        Ok(Self {
            documents,
            vectors,
            dimension,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Embed the query and return the `k` most similar documents, ordered
    /// by descending cosine similarity. Equal scores preserve corpus
    /// insertion order; fewer than `k` documents returns all of them.
    #[inline]
    pub fn retrieve(
        &self,
        embedder: &dyn Embedder,
        query: &str,
        k: usize,
    ) -> Result<Vec<Document>> {
        let query_vector = embedder.embed(query).map_err(|e| {
            CatechistError::Retrieval(format!("failed to embed query: {e}"))
        })?;

        if query_vector.len() != self.dimension {
            return Err(CatechistError::Retrieval(format!(
                "query embedding has {} dimensions, index has {}",
                query_vector.len(),
                self.dimension
            )));
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .map(|vector| cosine_similarity(&query_vector, vector))
            .enumerate()
            .collect();

        // Stable sort keeps corpus insertion order for equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let results: Vec<Document> = scored
            .into_iter()
            .take(k)
            .filter_map(|(idx, _)| self.documents.get(idx).cloned())
            .collect();

        debug!(
            "Retrieved {} documents for query (length: {})",
            results.len(),
            query.len()
        );

        Ok(results)
    }
}

/// Cosine similarity between two equal-length vectors. Zero-magnitude
/// vectors score 0 rather than dividing by zero.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|y| y * y).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
