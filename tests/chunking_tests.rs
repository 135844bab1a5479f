//! Tests for document chunking: fixed examples plus structural properties.

use proptest::prelude::*;
use rag_chat::chunking::DocumentProcessor;

#[test]
fn long_text_produces_multiple_chunks() {
    let processor = DocumentProcessor::new(200, 50);
    let text = "This is a test document. ".repeat(50);
    let chunks = processor.chunk_text(&text, "test.pdf");
    assert!(chunks.len() > 1);
}

#[test]
fn chunks_carry_source_and_index() {
    let processor = DocumentProcessor::new(200, 50);
    let text = "Hello world. This is a test document with some content.";
    let chunks = processor.chunk_text(text, "doc.pdf");
    assert_eq!(chunks[0].source, "doc.pdf");
    assert_eq!(chunks[0].chunk_index, 0);
}

#[test]
fn chunk_content_is_never_blank() {
    let processor = DocumentProcessor::new(200, 50);
    let text = "Some meaningful content here that should be preserved in the chunk.";
    for chunk in processor.chunk_text(text, "test.pdf") {
        assert!(!chunk.content.trim().is_empty());
    }
}

#[test]
fn empty_text_yields_no_chunks() {
    let processor = DocumentProcessor::new(200, 50);
    assert!(processor.chunk_text("", "empty.pdf").is_empty());
}

#[test]
fn whitespace_only_text_yields_no_chunks() {
    let processor = DocumentProcessor::new(200, 50);
    assert!(processor.chunk_text("  \n\n\t  ", "blank.pdf").is_empty());
}

#[test]
fn short_text_is_a_single_unmodified_chunk() {
    let processor = DocumentProcessor::new(200, 50);
    let chunks = processor.chunk_text("Short text.", "short.pdf");
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, "Short text.");
    assert_eq!(chunks[0].chunk_index, 0);
}

#[test]
fn small_chunk_size_produces_many_chunks() {
    let processor = DocumentProcessor::new(50, 10);
    let text = "word ".repeat(100);
    let chunks = processor.chunk_text(&text, "test.pdf");
    assert!(chunks.len() > 5);
}

#[test]
fn prefers_paragraph_boundaries() {
    let processor = DocumentProcessor::new(40, 0);
    let text = "First paragraph here.\n\nSecond paragraph follows after a break.";
    let chunks = processor.chunk_text(text, "p.txt");
    // The split lands at the paragraph break, not mid-sentence.
    assert_eq!(chunks[0].content, "First paragraph here.\n\n");
}

#[test]
fn multibyte_text_splits_on_char_boundaries() {
    let processor = DocumentProcessor::new(10, 2);
    let text = "日本語のテキストを分割するテストです".repeat(3);
    let chunks = processor.chunk_text(&text, "jp.txt");
    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(chunk.content.chars().count() <= 10);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Indices are zero-based and strictly increasing by one.
    #[test]
    fn indices_are_sequential(
        text in "[a-zA-Z .\n]{1,800}",
        chunk_size in 10usize..200,
    ) {
        let processor = DocumentProcessor::new(chunk_size, chunk_size / 4);
        let chunks = processor.chunk_text(&text, "prop.txt");
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.chunk_index, i);
        }
    }

    /// Every chunk fits the size budget and is a contiguous span of the
    /// input; the first chunk starts the input and the last one ends it.
    #[test]
    fn chunks_are_bounded_spans_of_the_input(
        text in "[a-zA-Z .\n]{1,800}",
        chunk_size in 10usize..200,
        overlap_ratio in 0usize..4,
    ) {
        let overlap = chunk_size * overlap_ratio / 8;
        let processor = DocumentProcessor::new(chunk_size, overlap);
        let chunks = processor.chunk_text(&text, "prop.txt");

        if text.trim().is_empty() {
            prop_assert!(chunks.is_empty());
            return Ok(());
        }

        prop_assert!(!chunks.is_empty());
        for chunk in &chunks {
            prop_assert!(chunk.content.chars().count() <= chunk_size);
            prop_assert!(text.contains(&chunk.content));
        }
        prop_assert!(text.starts_with(&chunks[0].content));
        prop_assert!(text.ends_with(&chunks[chunks.len() - 1].content));
    }

    /// With zero overlap the chunks partition the input exactly.
    #[test]
    fn zero_overlap_chunks_reconstruct_the_input(
        text in "[a-zA-Z .\n]{1,800}",
        chunk_size in 10usize..200,
    ) {
        let processor = DocumentProcessor::new(chunk_size, 0);
        let chunks = processor.chunk_text(&text, "prop.txt");

        if text.trim().is_empty() {
            prop_assert!(chunks.is_empty());
            return Ok(());
        }

        let rebuilt: String = chunks.iter().map(|c| c.content.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
    }
}
