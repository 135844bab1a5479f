//! Document chunking.
//!
//! [`DocumentProcessor`] splits raw text into overlapping chunks, breaking
//! preferentially at paragraph boundaries, then line boundaries, then
//! sentence boundaries, then spaces, and only as a last resort at an
//! arbitrary character position.

use crate::document::Chunk;

/// Default maximum chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;
/// Default number of overlapping characters between consecutive chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;

/// Break-point candidates, highest priority first. The character-level
/// fallback applies when none of these fit within the size budget.
const SEPARATORS: [&str; 4] = ["\n\n", "\n", ". ", " "];

/// Splits text into overlapping chunks tagged with their source.
///
/// Sizes are measured in characters, not bytes, so splitting never lands
/// inside a multi-byte character.
///
/// # Example
///
/// ```rust
/// use rag_chat::chunking::DocumentProcessor;
///
/// let processor = DocumentProcessor::new(200, 50);
/// let chunks = processor.chunk_text("Short text.", "notes.txt");
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].chunk_index, 0);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl DocumentProcessor {
    /// Create a new `DocumentProcessor`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk
    /// * `chunk_overlap` — number of characters shared between consecutive chunks
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self { chunk_size, chunk_overlap }
    }

    /// Create a processor from a validated [`RagConfig`](crate::config::RagConfig).
    pub fn from_config(config: &crate::config::RagConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split text into overlapping chunks.
    ///
    /// Returns an empty `Vec` for empty or whitespace-only text. Otherwise
    /// each chunk is tagged with `source` and a zero-based `chunk_index` in
    /// text order.
    pub fn chunk_text(&self, text: &str, source: &str) -> Vec<Chunk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        split_recursive(text, self.chunk_size, self.chunk_overlap, &SEPARATORS)
            .into_iter()
            .enumerate()
            .map(|(i, content)| Chunk {
                content,
                source: source.to_string(),
                chunk_index: i,
            })
            .collect()
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text at `separator`, keeping the separator attached to the
/// preceding segment so that concatenating segments reproduces the input.
fn split_keeping_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;

    while let Some(pos) = text[start..].find(separator) {
        let end = start + pos + separator.len();
        segments.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        segments.push(&text[start..]);
    }

    segments
}

/// Character-level fallback: fixed-size windows advanced by
/// `chunk_size − chunk_overlap` characters.
fn split_by_size(text: &str, chunk_size: usize, chunk_overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let step = chunk_size.saturating_sub(chunk_overlap);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() || step == 0 {
            break;
        }
        start += step;
    }

    chunks
}

/// Split text at the first available separator, merge segments back into
/// chunks that respect `chunk_size`, and seed each new chunk with the
/// trailing segments of its predecessor up to `chunk_overlap` characters.
/// Segments that exceed `chunk_size` on their own fall through to the next
/// separator in the list.
fn split_recursive(
    text: &str,
    chunk_size: usize,
    chunk_overlap: usize,
    separators: &[&str],
) -> Vec<String> {
    if char_len(text) <= chunk_size {
        return vec![text.to_string()];
    }

    let Some((separator, rest)) = separators.split_first() else {
        return split_by_size(text, chunk_size, chunk_overlap);
    };

    let segments = split_keeping_separator(text, separator);
    if segments.len() <= 1 {
        // Separator absent at this level.
        return split_recursive(text, chunk_size, chunk_overlap, rest);
    }

    let mut merged: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for segment in segments {
        let segment_len = char_len(segment);

        if !current.is_empty() && current_len + segment_len > chunk_size {
            merged.push(current.concat());
            let (kept, kept_len) = overlap_tail(&current, chunk_overlap);
            current = kept;
            current_len = kept_len;
        }

        current.push(segment);
        current_len += segment_len;
    }

    if !current.is_empty() {
        merged.push(current.concat());
    }

    merged
        .into_iter()
        .flat_map(|chunk| {
            if char_len(&chunk) > chunk_size {
                split_recursive(&chunk, chunk_size, chunk_overlap, rest)
            } else {
                vec![chunk]
            }
        })
        .collect()
}

/// Trailing segments of a finished chunk whose combined length fits within
/// the overlap budget, in original order, with their combined length.
fn overlap_tail<'a>(segments: &[&'a str], chunk_overlap: usize) -> (Vec<&'a str>, usize) {
    let mut kept = Vec::new();
    let mut kept_len = 0;

    for segment in segments.iter().rev() {
        let len = char_len(segment);
        if kept_len + len > chunk_overlap {
            break;
        }
        kept_len += len;
        kept.push(*segment);
    }

    kept.reverse();
    (kept, kept_len)
}
