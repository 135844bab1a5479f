//! # rag-chat
//!
//! Question answering over ingested documents with Retrieval-Augmented
//! Generation (RAG).
//!
//! ## Overview
//!
//! Three components in dependency order:
//!
//! - [`DocumentProcessor`] splits raw text into overlapping chunks.
//! - [`VectorStore`] embeds chunks and answers similarity queries.
//! - [`RagChain`] retrieves the top-k chunks for a question and delegates to
//!   a hosted model for a cited answer.
//!
//! Embedding and generation reach OpenAI through the trait seams
//! [`EmbeddingProvider`] and [`CompletionModel`]; swap in any implementation
//! to target a different backend or to test without a network.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rag_chat::{
//!     DocumentProcessor, OpenAIChatModel, OpenAIEmbedding, RagChain, VectorStore,
//! };
//!
//! let processor = DocumentProcessor::default();
//! let chunks = processor.chunk_text(&text, "guide.pdf");
//!
//! let store = Arc::new(VectorStore::new(
//!     Arc::new(OpenAIEmbedding::from_env()?),
//!     "documents",
//! ));
//! store.add_chunks(&chunks).await?;
//!
//! let chain = RagChain::builder()
//!     .store(store)
//!     .model(Arc::new(OpenAIChatModel::from_env()?))
//!     .build()?;
//!
//! let response = chain.query("Who created Python?").await?;
//! println!("{}", response.answer);
//! for source in &response.sources {
//!     println!("  [{} #{} score {:.2}]", source.source, source.chunk_index, source.score);
//! }
//! ```

pub mod chain;
pub mod chunking;
pub mod completion;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod openai;
pub mod vectorstore;

pub use chain::{RagChain, RagChainBuilder, RagResponse};
pub use chunking::DocumentProcessor;
pub use completion::{Completion, CompletionModel};
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Chunk, SearchResult};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use openai::{OpenAIChatModel, OpenAIEmbedding};
pub use vectorstore::VectorStore;
