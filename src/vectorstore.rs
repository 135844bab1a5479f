//! In-memory vector store with cosine-similarity search.
//!
//! [`VectorStore`] holds a named collection of chunks, each embedded at
//! insertion time by an [`EmbeddingProvider`]. Search embeds the query and
//! ranks stored chunks by `1 − cosine distance`. Each store instance owns
//! its collection, so distinct collection names are fully isolated.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::document::{Chunk, SearchResult};
use crate::embedding::EmbeddingProvider;
use crate::error::Result;

/// Default number of results returned by a search.
pub const DEFAULT_TOP_K: usize = 3;

/// A chunk persisted with its embedding.
#[derive(Debug, Clone)]
struct StoredChunk {
    chunk: Chunk,
    embedding: Vec<f32>,
}

/// A named collection of embedded chunks with similarity search.
///
/// Chunks are keyed by `"{source}_{chunk_index}"`, so re-adding a chunk with
/// the same source and index overwrites the prior entry. All operations are
/// async-safe via `tokio::sync::RwLock` and hold no per-query state.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use rag_chat::{OpenAIEmbedding, VectorStore};
///
/// let embedder = Arc::new(OpenAIEmbedding::from_env()?);
/// let store = VectorStore::new(embedder, "documents");
/// store.add_chunks(&chunks).await?;
/// let results = store.search("what is RAG?", 3).await?;
/// ```
pub struct VectorStore {
    embedder: Arc<dyn EmbeddingProvider>,
    collection_name: String,
    entries: RwLock<HashMap<String, StoredChunk>>,
}

impl VectorStore {
    /// Create an empty store for the named collection.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, collection_name: impl Into<String>) -> Self {
        Self {
            embedder,
            collection_name: collection_name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The name of the collection this store holds.
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    /// Embed and upsert chunks into the collection.
    ///
    /// No-op on empty input. Chunks with the same `(source, chunk_index)`
    /// pair as an existing entry replace it.
    pub async fn add_chunks(&self, chunks: &[Chunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let texts: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        let mut entries = self.entries.write().await;
        for (chunk, embedding) in chunks.iter().zip(embeddings) {
            let id = format!("{}_{}", chunk.source, chunk.chunk_index);
            entries.insert(id, StoredChunk { chunk: chunk.clone(), embedding });
        }

        info!(
            collection = %self.collection_name,
            chunk_count = chunks.len(),
            total = entries.len(),
            "added chunks"
        );

        Ok(())
    }

    /// Search the collection for the chunks most similar to `query`.
    ///
    /// Returns at most `min(k, count)` results ordered by descending score.
    /// An empty collection returns an empty `Vec` without embedding the
    /// query. Scores above 1 cannot occur, but a cosine distance above 1
    /// maps to a negative score, which is returned unclamped.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        {
            let entries = self.entries.read().await;
            if entries.is_empty() {
                return Ok(Vec::new());
            }
        }

        let query_embedding = self.embedder.embed(query).await?;

        let entries = self.entries.read().await;
        let mut results: Vec<SearchResult> = entries
            .values()
            .map(|stored| {
                let distance = 1.0 - cosine_similarity(&stored.embedding, &query_embedding);
                SearchResult {
                    content: stored.chunk.content.clone(),
                    source: stored.chunk.source.clone(),
                    chunk_index: stored.chunk.chunk_index,
                    score: 1.0 - distance,
                }
            })
            .collect();

        results
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(k.min(entries.len()));

        debug!(
            collection = %self.collection_name,
            k,
            result_count = results.len(),
            "search completed"
        );

        Ok(results)
    }

    /// Total number of stored chunks.
    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Cosine similarity between two vectors; 0.0 if either has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
