//! RAG chain: retrieval plus generation with source citations.
//!
//! [`RagChain`] queries a [`VectorStore`] for the chunks most relevant to a
//! question, assembles them into a grounding context, and delegates to a
//! [`CompletionModel`] for a cited answer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::completion::CompletionModel;
use crate::config::RagConfig;
use crate::document::SearchResult;
use crate::error::{RagError, Result};
use crate::vectorstore::{DEFAULT_TOP_K, VectorStore};

/// Context placeholder sent to the model when retrieval finds nothing.
const NO_CONTEXT_FOUND: &str = "No relevant context found.";

/// A generated answer with its supporting sources and token usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagResponse {
    /// The model's answer, verbatim.
    pub answer: String,
    /// The retrieved chunks the answer was grounded in, ordered by
    /// descending similarity.
    pub sources: Vec<SearchResult>,
    /// Prompt tokens consumed by the completion call.
    pub input_tokens: u32,
    /// Completion tokens produced by the completion call.
    pub output_tokens: u32,
}

/// Orchestrates retrieval from a [`VectorStore`] and generation via a
/// [`CompletionModel`].
///
/// Holds no per-query mutable state; concurrent queries are independent.
/// Failures in either the search step or the generation step abort the
/// whole `query` call.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use rag_chat::{OpenAIChatModel, RagChain};
///
/// let chain = RagChain::builder()
///     .store(store)
///     .model(Arc::new(OpenAIChatModel::from_env()?))
///     .top_k(3)
///     .build()?;
///
/// let response = chain.query("Who created Python?").await?;
/// println!("{} ({} sources)", response.answer, response.sources.len());
/// ```
pub struct RagChain {
    store: Arc<VectorStore>,
    model: Arc<dyn CompletionModel>,
    top_k: usize,
}

impl std::fmt::Debug for RagChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagChain")
            .field("top_k", &self.top_k)
            .finish_non_exhaustive()
    }
}

impl RagChain {
    /// Create a new [`RagChainBuilder`].
    pub fn builder() -> RagChainBuilder {
        RagChainBuilder::default()
    }

    /// Retrieve relevant chunks and generate a grounded answer.
    ///
    /// Performs one search against the vector store and one completion
    /// call. Returns the answer verbatim, the retrieved sources in search
    /// order, and the token counts the provider reported.
    pub async fn query(&self, question: &str) -> Result<RagResponse> {
        let results = self.store.search(question, self.top_k).await?;

        let context = build_context(&results);
        let system_prompt = build_system_prompt(&context);

        let completion = self.model.complete(&system_prompt, question).await?;

        info!(
            source_count = results.len(),
            input_tokens = completion.input_tokens,
            output_tokens = completion.output_tokens,
            "query completed"
        );

        Ok(RagResponse {
            answer: completion.text,
            sources: results,
            input_tokens: completion.input_tokens,
            output_tokens: completion.output_tokens,
        })
    }
}

/// Concatenate results into labeled sections, 1-based in search order.
fn build_context(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_CONTEXT_FOUND.to_string();
    }

    let sections: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("[Source {}: {}]\n{}", i + 1, r.source, r.content))
        .collect();
    sections.join("\n\n")
}

fn build_system_prompt(context: &str) -> String {
    format!(
        "You are a helpful assistant that answers questions based on the provided context. \
         Use ONLY the information from the context below to answer. \
         If the context doesn't contain enough information, say so. \
         Always cite which source(s) you used.\n\nContext:\n{context}"
    )
}

/// Builder for constructing a [`RagChain`].
///
/// `store` and `model` are required; `top_k` defaults to 3.
#[derive(Default)]
pub struct RagChainBuilder {
    store: Option<Arc<VectorStore>>,
    model: Option<Arc<dyn CompletionModel>>,
    top_k: Option<usize>,
}

impl RagChainBuilder {
    /// Set the vector store to retrieve from.
    pub fn store(mut self, store: Arc<VectorStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the completion model to generate with.
    pub fn model(mut self, model: Arc<dyn CompletionModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the number of chunks retrieved per query.
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    /// Take `top_k` from a [`RagConfig`].
    pub fn config(mut self, config: &RagConfig) -> Self {
        self.top_k = Some(config.top_k);
        self
    }

    /// Build the [`RagChain`], validating that all required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `store` or `model` is missing, or if
    /// `top_k` is zero.
    pub fn build(self) -> Result<RagChain> {
        let store =
            self.store.ok_or_else(|| RagError::Config("store is required".to_string()))?;
        let model =
            self.model.ok_or_else(|| RagError::Config("model is required".to_string()))?;
        let top_k = self.top_k.unwrap_or(DEFAULT_TOP_K);
        if top_k == 0 {
            return Err(RagError::Config("top_k must be greater than zero".to_string()));
        }

        Ok(RagChain { store, model, top_k })
    }
}
