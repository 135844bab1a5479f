//! Data types for chunks and search results.

use serde::{Deserialize, Serialize};

/// A bounded span of source text stored as one retrievable unit.
///
/// Chunks are produced by [`DocumentProcessor::chunk_text`](crate::chunking::DocumentProcessor::chunk_text)
/// and are sequential within a source: `chunk_index` is zero-based and
/// increases by one in text order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// The text content of the chunk.
    pub content: String,
    /// Identifier of the origin document (e.g. a filename).
    pub source: String,
    /// Zero-based position of this chunk within its source.
    pub chunk_index: usize,
}

/// A retrieved chunk paired with a relevance score.
///
/// Produced fresh per query by [`VectorStore::search`](crate::vectorstore::VectorStore::search).
/// `score` is `1 − cosine distance`: 1.0 for an identical direction, 0.0 for
/// orthogonal vectors. A distance above 1 yields a negative score, which is
/// returned as-is rather than clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// The text content of the retrieved chunk.
    pub content: String,
    /// Identifier of the origin document.
    pub source: String,
    /// Position of the chunk within its source.
    pub chunk_index: usize,
    /// Similarity score, higher is more relevant.
    pub score: f32,
}
