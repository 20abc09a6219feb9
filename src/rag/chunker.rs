use serde::{Deserialize, Serialize};

use crate::core::errors::ApiError;

/// A contiguous slice of the source document.
///
/// Offsets and lengths are measured in characters (Unicode scalar values),
/// not bytes, so multi-byte text chunks cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// The text content.
    pub text: String,
    /// Character offset of this chunk in the original document.
    pub start_offset: usize,
}

/// Split a document into overlapping fixed-size chunks.
///
/// A window of `chunk_size` characters advances with a stride of
/// `chunk_size - chunk_overlap`, so consecutive chunks share exactly
/// `chunk_overlap` characters. The final chunk may be shorter than
/// `chunk_size`; it is never padded. An empty document yields no chunks.
///
/// Invalid parameters are rejected up front rather than clamped, so a
/// misconfigured caller fails before any embedding work starts.
pub fn chunk(
    document: &str,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Result<Vec<Chunk>, ApiError> {
    if chunk_size == 0 {
        return Err(ApiError::BadRequest(
            "chunkSize must be greater than 0".to_string(),
        ));
    }
    if chunk_overlap >= chunk_size {
        return Err(ApiError::BadRequest(format!(
            "chunkOverlap ({}) must be smaller than chunkSize ({})",
            chunk_overlap, chunk_size
        )));
    }

    let chars: Vec<char> = document.chars().collect();
    let total_chars = chars.len();
    let stride = chunk_size - chunk_overlap;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < total_chars {
        let end = (start + chunk_size).min(total_chars);
        chunks.push(Chunk {
            text: chars[start..end].iter().collect(),
            start_offset: start,
        });
        start += stride;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_lengths_and_starts_follow_the_stride() {
        let document = "a".repeat(250);
        let chunks = chunk(&document, 100, 20).expect("valid parameters");

        for c in &chunks {
            assert!(c.text.chars().count() <= 100);
        }
        for pair in chunks.windows(2) {
            assert_eq!(pair[1].start_offset - pair[0].start_offset, 80);
        }
    }

    #[test]
    fn consecutive_chunks_overlap_exactly() {
        let document: String = ('a'..='z').cycle().take(300).collect();
        let chunks = chunk(&document, 100, 25).expect("valid parameters");

        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].text.chars().collect();
            let next: Vec<char> = pair[1].text.chars().collect();
            let tail: String = prev[prev.len() - 25..].iter().collect();
            let head: String = next[..25.min(next.len())].iter().collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn zero_overlap_round_trips_the_document() {
        let document = "The quick brown fox jumps over the lazy dog. ".repeat(40);
        let chunks = chunk(&document, 128, 0).expect("valid parameters");

        let rebuilt: String = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(rebuilt, document);
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        let chunks = chunk("", 100, 20).expect("valid parameters");
        assert!(chunks.is_empty());
    }

    #[test]
    fn short_document_yields_one_unpadded_chunk() {
        let chunks = chunk("hello", 100, 20).expect("valid parameters");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello");
        assert_eq!(chunks[0].start_offset, 0);
    }

    #[test]
    fn rejects_zero_chunk_size() {
        assert!(chunk("text", 0, 0).is_err());
    }

    #[test]
    fn rejects_overlap_not_smaller_than_size() {
        assert!(chunk("text", 10, 10).is_err());
        assert!(chunk("text", 10, 15).is_err());
    }

    #[test]
    fn multibyte_text_chunks_on_character_boundaries() {
        let document = "héllo wörld ünïcode tèxt".repeat(10);
        let chunks = chunk(&document, 16, 4).expect("valid parameters");
        for c in &chunks {
            assert!(c.text.chars().count() <= 16);
        }
    }
}
