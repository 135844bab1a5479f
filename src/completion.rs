//! Completion model trait for hosted chat-completion APIs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The text and token usage returned by a single completion call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Completion {
    /// The generated text, verbatim as the provider returned it.
    pub text: String,
    /// Prompt tokens consumed by the call.
    pub input_tokens: u32,
    /// Completion tokens produced by the call.
    pub output_tokens: u32,
}

/// A hosted language model invoked as a single suspending call.
///
/// The [`RagChain`](crate::chain::RagChain) sends a two-message exchange:
/// a system prompt carrying the retrieved context and the user's raw
/// question. Implementations do not retry; failures propagate to the caller.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Generate a completion for a system prompt and user message.
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<Completion>;
}
