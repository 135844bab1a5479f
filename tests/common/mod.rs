//! Shared test doubles: deterministic embedding providers and a recording
//! completion model. No test touches the network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use async_trait::async_trait;

use rag_chat::completion::{Completion, CompletionModel};
use rag_chat::embedding::EmbeddingProvider;
use rag_chat::error::Result;

pub const HASH_DIM: usize = 64;

/// Deterministic bag-of-words embedding: each lowercased alphanumeric word
/// increments one of `HASH_DIM` buckets. Texts sharing words get a positive
/// cosine similarity, which is enough to exercise ranking.
pub struct HashEmbedding;

#[async_trait]
impl EmbeddingProvider for HashEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; HASH_DIM];
        for word in text.split_whitespace() {
            let word: String =
                word.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase();
            if word.is_empty() {
                continue;
            }
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            vector[(hasher.finish() % HASH_DIM as u64) as usize] += 1.0;
        }
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        HASH_DIM
    }
}

/// Embedding provider with a fixed text-to-vector table. Unknown texts map
/// to the zero vector.
pub struct StaticEmbedding {
    vectors: HashMap<String, Vec<f32>>,
    dimensions: usize,
}

impl StaticEmbedding {
    pub fn new(dimensions: usize, vectors: &[(&str, Vec<f32>)]) -> Self {
        Self {
            vectors: vectors
                .iter()
                .map(|(text, v)| (text.to_string(), v.clone()))
                .collect(),
            dimensions,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for StaticEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.vectors.get(text).cloned().unwrap_or_else(|| vec![0.0; self.dimensions]))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Completion model that returns a canned answer and records every
/// (system prompt, user message) pair it receives.
pub struct RecordingModel {
    pub answer: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl RecordingModel {
    pub fn new(answer: &str, input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            answer: answer.to_string(),
            input_tokens,
            output_tokens,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_system_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(system, _)| system.clone())
    }
}

/// Completion model that always fails, for error-propagation tests.
pub struct FailingModel;

#[async_trait]
impl CompletionModel for FailingModel {
    async fn complete(&self, _system_prompt: &str, _user_message: &str) -> Result<Completion> {
        Err(rag_chat::RagError::Completion {
            provider: "Failing".into(),
            message: "simulated provider failure".into(),
        })
    }
}

#[async_trait]
impl CompletionModel for RecordingModel {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<Completion> {
        self.calls.lock().unwrap().push((system_prompt.to_string(), user_message.to_string()));
        Ok(Completion {
            text: self.answer.clone(),
            input_tokens: self.input_tokens,
            output_tokens: self.output_tokens,
        })
    }
}
