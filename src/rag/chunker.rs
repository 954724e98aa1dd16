//! Overlapping character chunker for document ingestion
//!
//! Splits one domain's raw text into a deterministic sequence of chunks
//! where consecutive chunks share exactly `chunk_overlap` characters.
//! Dropping the duplicated overlap and concatenating reconstructs the
//! input exactly. Offsets are measured in characters, not bytes, so
//! multi-byte UTF-8 text never splits mid code point.

use crate::config::ChunkingConfig;
use crate::types::{Chunk, Domain};

/// Split `text` into overlapping chunks for `domain`.
///
/// Empty input yields an empty sequence; input no longer than the chunk
/// size yields exactly one chunk containing the whole text.
pub fn chunk_text(text: &str, domain: Domain, params: &ChunkingConfig) -> Vec<Chunk> {
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let size = params.chunk_size.max(1);
    // Window advance; clamped so degenerate params still terminate.
    let step = size.saturating_sub(params.chunk_overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut sequence_index = 0;
    loop {
        let end = (start + size).min(chars.len());
        chunks.push(Chunk {
            text: chars[start..end].iter().collect(),
            domain,
            sequence_index,
        });
        sequence_index += 1;

        if end == chars.len() {
            break;
        }
        start += step;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn params(size: usize, overlap: usize) -> ChunkingConfig {
        ChunkingConfig {
            chunk_size: size,
            chunk_overlap: overlap,
        }
    }

    /// Rebuild the original text by dropping each chunk's leading overlap.
    fn reconstruct(chunks: &[Chunk], overlap: usize) -> String {
        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                out.push_str(&chunk.text);
            } else {
                out.extend(chunk.text.chars().skip(overlap));
            }
        }
        out
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(chunk_text("", Domain::Salary, &params(500, 50)).is_empty());
    }

    #[test]
    fn test_short_input_yields_single_chunk() {
        let chunks = chunk_text("short document", Domain::Salary, &params(500, 50));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "short document");
        assert_eq!(chunks[0].sequence_index, 0);
    }

    #[test]
    fn test_adjacent_chunks_share_exact_overlap() {
        let text: String = std::iter::repeat("abcdefghij").take(120).collect(); // 1200 chars
        let chunks = chunk_text(&text, Domain::Insurance, &params(500, 50));
        assert!(chunks.len() > 1);

        for pair in chunks.windows(2) {
            let prev: Vec<char> = pair[0].text.chars().collect();
            let next: Vec<char> = pair[1].text.chars().collect();
            let tail: String = prev[prev.len() - 50..].iter().collect();
            let head: String = next[..50].iter().collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_chunk_sizes_bounded() {
        let text = "x".repeat(1234);
        let chunks = chunk_text(&text, Domain::Salary, &params(500, 50));
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 500);
        }
    }

    #[test]
    fn test_sequence_indexes_are_ordered() {
        let text = "y".repeat(2000);
        let chunks = chunk_text(&text, Domain::Salary, &params(500, 50));
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.sequence_index, i);
            assert_eq!(chunk.domain, Domain::Salary);
        }
    }

    #[test]
    fn test_multibyte_text_chunks_on_char_boundaries() {
        let text: String = std::iter::repeat('保').take(1100).collect();
        let chunks = chunk_text(&text, Domain::Insurance, &params(500, 50));
        assert!(chunks.len() > 1);
        assert_eq!(reconstruct(&chunks, 50), text);
    }

    #[test]
    fn test_deterministic() {
        let text = "Base pay reviewed annually. Bonuses paid in Q4. ".repeat(40);
        let first = chunk_text(&text, Domain::Salary, &params(500, 50));
        let second = chunk_text(&text, Domain::Salary, &params(500, 50));
        assert_eq!(first, second);
    }

    #[quickcheck]
    fn prop_reconstruction_is_lossless(text: String) -> bool {
        let config = params(500, 50);
        let chunks = chunk_text(&text, Domain::Salary, &config);
        reconstruct(&chunks, config.chunk_overlap) == text
    }
}
